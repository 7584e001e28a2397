//! Arvak circuit compiler.
//!
//! Lowers a [`Circuit`](arvak_ir::Circuit) into a
//! [`CompiledProgram`](arvak_hal::CompiledProgram) that a specific backend
//! can execute. Compilation is a fixed pass pipeline driven by the
//! backend's [`BackendConfiguration`](arvak_hal::BackendConfiguration):
//!
//! ```text
//! Circuit
//!    │
//!    ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── BackendConfiguration (n_qubits, basis_gates, coupling_map)
//! └─────────────┘
//!    │
//!    ├── CheckQubitCount     width fits the backend
//!    ├── BasisTranslation    rewrite into native gates
//!    └── CheckConnectivity   two-qubit gates sit on coupling edges
//!    │
//!    ▼
//! CompiledProgram (uuid, RunConfig, experiments)
//! ```
//!
//! No layout or routing is performed: a circuit that needs SWAP insertion
//! is rejected with [`CompileError::ConnectivityViolation`].
//!
//! # Example
//!
//! ```ignore
//! use arvak_compile::{CompileOptions, compile};
//!
//! let program = compile(&circuit, &backend, &CompileOptions::default())?;
//! let job = backend.run(program).await?;
//! ```

pub mod compile;
pub mod error;
pub mod manager;
pub mod pass;
pub mod passes;

pub use compile::{CompileOptions, compile, compile_batch, compile_for_target};
pub use error::{CompileError, CompileResult};
pub use manager::PassManager;
pub use pass::{Pass, PassKind};
