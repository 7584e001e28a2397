//! Fake hardware devices.
//!
//! Each device pairs a bundled JSON snapshot (configuration plus
//! calibration) with the local statevector engine. They report
//! `simulator = false` and return properties, which makes them the
//! hardware-shaped counterpart to [`arvak_adapter_sim::SimulatorBackend`]
//! when exercising the conformance suite.
//!
//! | Device | Qubits | Basis | Coupling |
//! |--------|--------|-------|----------|
//! | `fake_linear5` | 5 | `id rz sx x cx` | line 0-1-2-3-4 |
//! | `fake_star5` | 5 | `rz sx cz` | star around qubit 0 |

mod backend;
mod snapshot;

pub use backend::FakeBackend;
pub use snapshot::FakeDevice;
