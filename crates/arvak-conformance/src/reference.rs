//! Reference circuits.

use std::sync::LazyLock;

use arvak_ir::{Circuit, ClbitId, IrResult, QubitId};

/// The circuit every backend must run: a measured Bell pair.
///
/// Built once per process and shared read-only by every suite.
pub static REFERENCE_CIRCUIT: LazyLock<Circuit> = LazyLock::new(|| {
    // Fixed construction, exercised by `tests::test_bell_shape`.
    ReferenceCircuits::bell().expect("Bell reference circuit is well-formed")
});

/// Provider of small, well-known circuits.
pub struct ReferenceCircuits;

impl ReferenceCircuits {
    /// `h q0; cx q0, q1; measure q0 -> c0; measure q1 -> c1`.
    pub fn bell() -> IrResult<Circuit> {
        let mut circuit = Self::bell_no_measure()?;
        circuit
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }

    /// The Bell pair without measurement.
    pub fn bell_no_measure() -> IrResult<Circuit> {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }
}
