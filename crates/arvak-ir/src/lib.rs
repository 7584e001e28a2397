//! Arvak Circuit Representation
//!
//! The circuit model shared by the compiler, the backends, and the
//! conformance suite. A [`Circuit`] is an ordered list of validated
//! [`Instruction`]s over a fixed number of qubits and classical bits.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use arvak_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `id`, `x`, `y`, `z` | 1 | Identity and Pauli gates |
//! | `h`, `s`, `sdg`, `t`, `tdg`, `sx` | 1 | Clifford+T gates |
//! | `rx`, `ry`, `rz`, `p`, `u` | 1 | Rotations |
//! | `cx`, `cy`, `cz`, `swap` | 2 | Two-qubit gates |
//! | `ccx` | 3 | Toffoli |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
