//! Target-specific compilation passes.
//!
//! These passes read the backend configuration (width, basis gates,
//! coupling map) and either reject the circuit or rewrite it into a form
//! the backend can execute.

pub mod checks;
pub mod translation;

pub use checks::{CheckConnectivity, CheckQubitCount};
pub use translation::BasisTranslation;
