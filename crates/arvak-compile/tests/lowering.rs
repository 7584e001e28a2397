//! Integration tests for lowering circuits onto constrained devices.

use arvak_compile::{CompileError, CompileOptions, compile_for_target};
use arvak_hal::{BackendConfiguration, linear_coupling, star_coupling};
use arvak_ir::{Circuit, ClbitId, QubitId};

fn bell() -> Circuit {
    let mut circuit = Circuit::with_size("bell", 2, 2);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.measure(QubitId(0), ClbitId(0)).unwrap();
    circuit.measure(QubitId(1), ClbitId(1)).unwrap();
    circuit
}

fn native_only(circuit_ops: &[arvak_ir::Instruction], target: &BackendConfiguration) -> bool {
    circuit_ops
        .iter()
        .filter(|i| i.is_gate())
        .all(|i| target.supports_gate(i.name()))
}

#[test]
fn bell_lowers_onto_cz_star() {
    let target = BackendConfiguration::device("star", 5, ["rz", "sx", "cz"], star_coupling(5));
    let program = compile_for_target(&[bell()], &target, &CompileOptions::default()).unwrap();

    let experiment = &program.experiments[0];
    assert!(native_only(&experiment.instructions, &target));
    assert_eq!(
        experiment.instructions.iter().filter(|i| i.is_measure()).count(),
        2
    );
}

#[test]
fn measurements_stay_after_gates() {
    let target =
        BackendConfiguration::device("line", 5, ["id", "rz", "sx", "x", "cx"], linear_coupling(5));
    let program = compile_for_target(&[bell()], &target, &CompileOptions::default()).unwrap();

    let instructions = &program.experiments[0].instructions;
    let first_measure = instructions.iter().position(|i| i.is_measure()).unwrap();
    assert!(instructions[first_measure..].iter().all(|i| i.is_measure()));
}

#[test]
fn uncoupled_pair_is_rejected() {
    let target = BackendConfiguration::device("star", 5, ["rz", "sx", "cz"], star_coupling(5));
    let mut circuit = Circuit::with_size("leaf_to_leaf", 5, 0);
    circuit.cz(QubitId(1), QubitId(2)).unwrap();

    let err = compile_for_target(&[circuit], &target, &CompileOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        CompileError::ConnectivityViolation { a: 1, b: 2, .. }
    ));
}

#[test]
fn reversed_edge_is_accepted() {
    let target =
        BackendConfiguration::device("line", 3, ["rz", "sx", "x", "cx"], linear_coupling(3));
    let mut circuit = Circuit::with_size("reverse", 3, 0);
    circuit.cx(QubitId(2), QubitId(1)).unwrap();

    assert!(compile_for_target(&[circuit], &target, &CompileOptions::default()).is_ok());
}
