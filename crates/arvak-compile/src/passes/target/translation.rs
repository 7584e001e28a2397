//! Basis translation pass.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use arvak_hal::BackendConfiguration;
use arvak_ir::{Circuit, Instruction, IrError, QubitId, StandardGate};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};

/// Rewrites cap on nested decompositions (e.g. `swap → cx → cz + h → rz + sx`).
const MAX_DEPTH: usize = 4;

/// Basis translation pass.
///
/// Replaces every gate outside the target's basis with an equivalent
/// sequence (up to global phase) of basis gates. Supported rewrites:
///
/// | Gate | Rewrite | Requires |
/// |------|---------|----------|
/// | `h` | `rz(π/2) · sx · rz(π/2)` | `rz`, `sx` |
/// | `h` | `u(π/2, 0, π)` | `u` |
/// | `x` | `sx · sx` | `sx` |
/// | `x` | `rx(π)` | `rx` |
/// | `z`, `s`, `sdg`, `t`, `tdg`, `p` | `rz(θ)` | `rz` |
/// | `cx` | `h(t) · cz · h(t)` | `cz` |
/// | `cz` | `h(t) · cx · h(t)` | `cx` |
/// | `swap` | three `cx` | `cx` or `cz` |
/// | `id` | removed | — |
pub struct BasisTranslation;

impl Pass for BasisTranslation {
    fn name(&self) -> &'static str {
        "BasisTranslation"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, target: &BackendConfiguration) -> CompileResult<()> {
        let mut translated = Circuit::with_size(
            circuit.name(),
            circuit.num_qubits() as u32,
            circuit.num_clbits() as u32,
        );
        for inst in circuit.instructions() {
            for replacement in translate(inst.clone(), target, 0)? {
                translated.apply(replacement)?;
            }
        }
        *circuit = translated;
        Ok(())
    }

    fn should_run(&self, _circuit: &Circuit, target: &BackendConfiguration) -> bool {
        !target.basis_gates.is_empty()
    }
}

fn translate(
    inst: Instruction,
    target: &BackendConfiguration,
    depth: usize,
) -> CompileResult<Vec<Instruction>> {
    let Some(gate) = inst.as_gate().copied() else {
        return Ok(vec![inst]);
    };
    if target.supports_gate(gate.name()) {
        return Ok(vec![inst]);
    }

    let unsupported = || CompileError::UnsupportedGate {
        gate: gate.name().to_string(),
        basis: target.basis_gates.join(", "),
    };
    if depth >= MAX_DEPTH {
        return Err(unsupported());
    }
    // Deserialized circuits bypass `Circuit::apply`.
    if inst.qubits.len() != gate.num_qubits() as usize {
        return Err(IrError::QubitCountMismatch {
            gate_name: gate.name().to_string(),
            expected: gate.num_qubits(),
            got: inst.qubits.len() as u32,
        }
        .into());
    }

    let replacement = decompose(gate, &inst.qubits, target).ok_or_else(unsupported)?;
    let mut out = Vec::with_capacity(replacement.len());
    for r in replacement {
        out.extend(translate(r, target, depth + 1)?);
    }
    Ok(out)
}

fn decompose(
    gate: StandardGate,
    qubits: &[QubitId],
    target: &BackendConfiguration,
) -> Option<Vec<Instruction>> {
    let has = |name: &str| target.supports_gate(name);
    let on = |g: StandardGate, q: QubitId| Instruction::single_qubit_gate(g, q);

    let rz_angle = match gate {
        StandardGate::Z => Some(PI),
        StandardGate::S => Some(FRAC_PI_2),
        StandardGate::Sdg => Some(-FRAC_PI_2),
        StandardGate::T => Some(FRAC_PI_4),
        StandardGate::Tdg => Some(-FRAC_PI_4),
        StandardGate::P(theta) => Some(theta),
        _ => None,
    };
    if let (Some(theta), &[q]) = (rz_angle, qubits) {
        return has("rz").then(|| vec![on(StandardGate::Rz(theta), q)]);
    }

    match (gate, qubits) {
        (StandardGate::I, _) => Some(vec![]),
        (StandardGate::H, &[q]) if has("rz") && has("sx") => Some(vec![
            on(StandardGate::Rz(FRAC_PI_2), q),
            on(StandardGate::SX, q),
            on(StandardGate::Rz(FRAC_PI_2), q),
        ]),
        (StandardGate::H, &[q]) if has("u") => Some(vec![on(StandardGate::U(FRAC_PI_2, 0.0, PI), q)]),
        (StandardGate::X, &[q]) if has("sx") => Some(vec![on(StandardGate::SX, q), on(StandardGate::SX, q)]),
        (StandardGate::X, &[q]) if has("rx") => Some(vec![on(StandardGate::Rx(PI), q)]),
        (StandardGate::CX, &[c, t]) if has("cz") => Some(vec![
            on(StandardGate::H, t),
            Instruction::two_qubit_gate(StandardGate::CZ, c, t),
            on(StandardGate::H, t),
        ]),
        (StandardGate::CZ, &[c, t]) if has("cx") => Some(vec![
            on(StandardGate::H, t),
            Instruction::two_qubit_gate(StandardGate::CX, c, t),
            on(StandardGate::H, t),
        ]),
        (StandardGate::Swap, &[a, b]) if has("cx") || has("cz") => Some(vec![
            Instruction::two_qubit_gate(StandardGate::CX, a, b),
            Instruction::two_qubit_gate(StandardGate::CX, b, a),
            Instruction::two_qubit_gate(StandardGate::CX, a, b),
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arvak_hal::{linear_coupling, star_coupling};
    use arvak_ir::ClbitId;

    fn ibm_like() -> BackendConfiguration {
        BackendConfiguration::device("ibm_like", 3, ["id", "rz", "sx", "x", "cx"], linear_coupling(3))
    }

    fn cz_native() -> BackendConfiguration {
        BackendConfiguration::device("cz_native", 3, ["rz", "sx", "cz"], star_coupling(3))
    }

    fn bell() -> Circuit {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.measure(QubitId(1), ClbitId(1)).unwrap();
        circuit
    }

    fn only_basis(circuit: &Circuit, target: &BackendConfiguration) -> bool {
        circuit
            .instructions()
            .iter()
            .filter(|i| i.is_gate())
            .all(|i| target.supports_gate(i.name()))
    }

    #[test]
    fn test_bell_to_ibm_basis() {
        let target = ibm_like();
        let mut circuit = bell();
        BasisTranslation.run(&mut circuit, &target).unwrap();

        assert!(only_basis(&circuit, &target));
        let ops = circuit.count_ops();
        assert_eq!(ops.get("rz"), Some(&2));
        assert_eq!(ops.get("sx"), Some(&1));
        assert_eq!(ops.get("cx"), Some(&1));
        assert_eq!(ops.get("measure"), Some(&2));
        assert_eq!(circuit.name(), "bell");
    }

    #[test]
    fn test_bell_to_cz_basis() {
        let target = cz_native();
        let mut circuit = bell();
        BasisTranslation.run(&mut circuit, &target).unwrap();

        assert!(only_basis(&circuit, &target));
        let ops = circuit.count_ops();
        // Three Hadamards (one original, two around the CZ), three gates each.
        assert_eq!(ops.get("rz"), Some(&6));
        assert_eq!(ops.get("sx"), Some(&3));
        assert_eq!(ops.get("cz"), Some(&1));
    }

    #[test]
    fn test_swap_expands_through_cz() {
        let target = cz_native();
        let mut circuit = Circuit::with_size("swap", 2, 0);
        circuit.swap(QubitId(0), QubitId(1)).unwrap();
        BasisTranslation.run(&mut circuit, &target).unwrap();

        assert!(only_basis(&circuit, &target));
        assert_eq!(circuit.count_ops().get("cz"), Some(&3));
    }

    #[test]
    fn test_identity_removed() {
        let target = cz_native();
        let mut circuit = Circuit::with_size("id", 1, 0);
        circuit.gate(StandardGate::I, [QubitId(0)]).unwrap();
        BasisTranslation.run(&mut circuit, &target).unwrap();
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_untranslatable_gate() {
        let target = ibm_like();
        let mut circuit = Circuit::with_size("toffoli", 3, 0);
        circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap();
        let err = BasisTranslation.run(&mut circuit, &target).unwrap_err();
        assert!(matches!(err, CompileError::UnsupportedGate { gate, .. } if gate == "ccx"));
    }

    #[test]
    fn test_missing_operand_is_an_error() {
        let target = cz_native();
        let inst = Instruction::gate(StandardGate::CX, [QubitId(0)]);
        let err = translate(inst, &target, 0).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Ir(IrError::QubitCountMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_supported_gates_untouched() {
        let target = ibm_like();
        let mut circuit = Circuit::with_size("native", 2, 0);
        circuit.sx(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        let before = circuit.clone();
        BasisTranslation.run(&mut circuit, &target).unwrap();
        assert_eq!(circuit, before);
    }
}
