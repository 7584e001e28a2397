//! Check outcomes.

use arvak_hal::{BackendConfiguration, BackendProperties, BackendStatus, ExecutionResult};

use crate::error::ConformanceError;

/// The value a passing check observed.
#[derive(Debug, Clone)]
pub enum Evidence {
    /// Returned by `configuration()`.
    Configuration(BackendConfiguration),
    /// Returned by `properties()`.
    Properties(Option<BackendProperties>),
    /// Returned by `status()`.
    Status(BackendStatus),
    /// Result of running the reference circuit.
    Execution(ExecutionResult),
}

/// How a single check ended.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The check passed.
    Passed(Evidence),
    /// The check failed.
    Failed(ConformanceError),
    /// The check did not run.
    Skipped(String),
}

impl CheckOutcome {
    /// Whether the check passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed(_))
    }

    /// Whether the check failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckOutcome::Failed(_))
    }

    /// Whether the check was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckOutcome::Skipped(_))
    }

    /// The evidence of a passing check.
    pub fn evidence(&self) -> Option<&Evidence> {
        match self {
            CheckOutcome::Passed(evidence) => Some(evidence),
            _ => None,
        }
    }

    /// The error of a failing check.
    pub fn error(&self) -> Option<&ConformanceError> {
        match self {
            CheckOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::Passed(_) => "PASS",
            CheckOutcome::Failed(_) => "FAIL",
            CheckOutcome::Skipped(_) => "SKIP",
        }
    }
}
