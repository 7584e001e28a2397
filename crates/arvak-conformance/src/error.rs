//! Error types for conformance runs.

use arvak_compile::CompileError;
use arvak_hal::HalError;
use thiserror::Error;

use crate::check::Check;

/// Why a check failed.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// The backend answered, but the answer breaks the contract.
    #[error("{check}: {message}")]
    Assertion {
        /// Check that raised the assertion.
        check: Check,
        /// What was wrong.
        message: String,
    },

    /// The backend raised an error.
    #[error("backend error: {0}")]
    Backend(#[from] HalError),

    /// The reference circuit could not be compiled for the backend.
    #[error("compilation failed: {0}")]
    Compile(#[from] CompileError),

    /// The backend could not be constructed.
    #[error("backend factory failed: {0}")]
    Factory(#[source] HalError),
}

/// Why a suite could not produce a backend.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The suite is the unspecialised template and must not run.
    #[error("skipped: {0}")]
    Skip(String),

    /// The factory returned an error.
    #[error("backend factory failed: {0}")]
    Factory(#[source] HalError),
}

/// Result of running a single check.
pub type ConformanceResult<T> = Result<T, ConformanceError>;
