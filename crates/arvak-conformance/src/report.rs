//! Suite reports.

use std::fmt;

use crate::check::Check;
use crate::error::ConformanceError;
use crate::outcome::CheckOutcome;

/// Outcomes of one suite run, in check order.
#[derive(Debug)]
pub struct SuiteReport {
    /// Suite name.
    pub suite: String,
    /// One entry per executed check.
    pub outcomes: Vec<(Check, CheckOutcome)>,
}

impl SuiteReport {
    /// Number of passing checks.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_passed()).count()
    }

    /// Number of failing checks.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_failed()).count()
    }

    /// Number of skipped checks.
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_skipped()).count()
    }

    /// Outcome of a given check, if it ran.
    pub fn outcome(&self, check: Check) -> Option<&CheckOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == check)
            .map(|(_, o)| o)
    }

    /// Every failure with the check that raised it.
    pub fn failures(&self) -> impl Iterator<Item = (Check, &ConformanceError)> {
        self.outcomes
            .iter()
            .filter_map(|(c, o)| o.error().map(|e| (*c, e)))
    }

    /// No check failed and at least one actually ran.
    pub fn is_conformant(&self) -> bool {
        self.failed() == 0 && self.skipped() < self.outcomes.len()
    }

    /// Panic with the report unless the backend is conformant.
    pub fn assert_conformant(&self) {
        assert!(self.is_conformant(), "backend is not conformant\n{self}");
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} passed, {} failed, {} skipped",
            self.suite,
            self.passed(),
            self.failed(),
            self.skipped()
        )?;
        for (check, outcome) in &self.outcomes {
            write!(f, "  {} {}", outcome.label(), check.name())?;
            match outcome {
                CheckOutcome::Passed(_) => writeln!(f)?,
                CheckOutcome::Failed(err) => writeln!(f, ": {err}")?,
                CheckOutcome::Skipped(reason) => writeln!(f, " ({reason})")?,
            }
        }
        Ok(())
    }
}
