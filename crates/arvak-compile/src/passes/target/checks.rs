//! Target admission checks.

use arvak_hal::BackendConfiguration;
use arvak_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};

/// Rejects circuits wider than the target.
pub struct CheckQubitCount;

impl Pass for CheckQubitCount {
    fn name(&self) -> &'static str {
        "CheckQubitCount"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, target: &BackendConfiguration) -> CompileResult<()> {
        if circuit.num_qubits() > target.n_qubits as usize {
            return Err(CompileError::CircuitTooLarge {
                circuit: circuit.name().to_string(),
                backend: target.backend_name.clone(),
                required: circuit.num_qubits(),
                available: target.n_qubits,
            });
        }
        Ok(())
    }
}

/// Rejects multi-qubit gates between qubits that share no coupling edge.
///
/// No routing is attempted: the circuit must already respect the target's
/// connectivity.
pub struct CheckConnectivity;

impl Pass for CheckConnectivity {
    fn name(&self) -> &'static str {
        "CheckConnectivity"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, target: &BackendConfiguration) -> CompileResult<()> {
        for inst in circuit.instructions() {
            if !inst.is_gate() || inst.qubits.len() < 2 {
                continue;
            }
            for (i, a) in inst.qubits.iter().enumerate() {
                for b in &inst.qubits[i + 1..] {
                    if !target.is_connected(a.0, b.0) {
                        return Err(CompileError::ConnectivityViolation {
                            gate: inst.name().to_string(),
                            a: a.0,
                            b: b.0,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn should_run(&self, _circuit: &Circuit, target: &BackendConfiguration) -> bool {
        target.coupling_map.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arvak_hal::linear_coupling;
    use arvak_ir::QubitId;

    fn linear3() -> BackendConfiguration {
        BackendConfiguration::device("linear3", 3, ["cx", "h"], linear_coupling(3))
    }

    #[test]
    fn test_qubit_count_rejects_wide_circuit() {
        let mut circuit = Circuit::with_size("wide", 4, 0);
        let err = CheckQubitCount.run(&mut circuit, &linear3()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::CircuitTooLarge {
                required: 4,
                available: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_connectivity_accepts_neighbours() {
        let mut circuit = Circuit::with_size("ok", 3, 0);
        circuit.cx(QubitId(2), QubitId(1)).unwrap();
        CheckConnectivity.run(&mut circuit, &linear3()).unwrap();
    }

    #[test]
    fn test_connectivity_rejects_distant_pair() {
        let mut circuit = Circuit::with_size("far", 3, 0);
        circuit.cx(QubitId(0), QubitId(2)).unwrap();
        let err = CheckConnectivity.run(&mut circuit, &linear3()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::ConnectivityViolation { a: 0, b: 2, .. }
        ));
    }

    #[test]
    fn test_connectivity_skipped_without_coupling_map() {
        let sim = BackendConfiguration::simulator("sim", 3);
        assert!(!CheckConnectivity.should_run(&Circuit::new("c"), &sim));
    }
}
