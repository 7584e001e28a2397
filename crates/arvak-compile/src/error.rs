//! Error types for the compiler.

use arvak_hal::HalError;
use arvak_ir::IrError;
use thiserror::Error;

/// Errors raised while compiling a circuit for a backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// The circuit is wider than the backend.
    #[error("Circuit '{circuit}' needs {required} qubits but backend '{backend}' has {available}")]
    CircuitTooLarge {
        /// Circuit name.
        circuit: String,
        /// Backend name.
        backend: String,
        /// Qubits the circuit uses.
        required: usize,
        /// Qubits the backend offers.
        available: u32,
    },

    /// A gate has no translation into the backend's basis.
    #[error("Gate '{gate}' cannot be expressed in basis [{basis}]")]
    UnsupportedGate {
        /// Gate name.
        gate: String,
        /// Comma-separated basis gates.
        basis: String,
    },

    /// A multi-qubit gate acts on qubits without a coupling edge.
    #[error("Gate '{gate}' on qubits ({a}, {b}) violates the coupling map")]
    ConnectivityViolation {
        /// Gate name.
        gate: String,
        /// First qubit.
        a: u32,
        /// Second qubit.
        b: u32,
    },

    /// Requested shots outside the backend's range.
    #[error("Invalid shots {shots}: backend accepts 1..={max}")]
    InvalidShots {
        /// Requested shots.
        shots: u32,
        /// Backend maximum.
        max: u32,
    },

    /// Nothing to compile.
    #[error("No circuits to compile")]
    EmptyBatch,

    /// Pass execution failed.
    #[error("Pass '{pass}' failed: {message}")]
    PassFailed {
        /// Name of the pass.
        pass: String,
        /// Error message.
        message: String,
    },

    /// IR error.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// The backend could not describe itself.
    #[error("Backend error: {0}")]
    Hal(#[from] HalError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
