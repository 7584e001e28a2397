//! Execution results.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Measurement histogram keyed by bitstring (classical bit 0 rightmost).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, u64>);

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Observations of `bitstring` (zero if never seen).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total observations.
    pub fn total_shots(&self) -> u64 {
        self.0.values().sum()
    }

    /// Most frequent outcome; ties resolve to the smallest bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Distinct outcomes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(bitstring, count)` in bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Outcome of a single experiment within a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Experiment (circuit) name.
    pub name: String,
    /// Shots executed.
    pub shots: u32,
    /// Whether this experiment succeeded.
    pub success: bool,
    /// Measurement histogram.
    pub counts: Counts,
    /// Free-form status.
    #[serde(default)]
    pub status: String,
}

/// Outcome of a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Backend that ran the job.
    pub backend_name: String,
    /// Backend version.
    pub backend_version: String,
    /// Job identifier.
    pub job_id: String,
    /// Whether the job as a whole succeeded.
    pub success: bool,
    /// Per-experiment results, in submission order.
    pub results: Vec<ExperimentResult>,
    /// Completion time.
    pub date: DateTime<Utc>,
    /// Wall-clock execution time (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken_ms: Option<u64>,
}

impl ExecutionResult {
    /// Counts of the experiment named `name`.
    pub fn get_counts(&self, name: &str) -> Option<&Counts> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.counts)
    }

    /// Counts of the first experiment.
    pub fn counts(&self) -> Option<&Counts> {
        self.results.first().map(|r| &r.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("00", 3);
        counts.insert("11", 5);
        counts.insert("00", 2);

        assert_eq!(counts.get("00"), 5);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total_shots(), 10);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_most_frequent_tie_breaks_low() {
        let mut counts = Counts::new();
        assert!(counts.most_frequent().is_none());
        counts.insert("11", 4);
        counts.insert("00", 4);
        assert_eq!(counts.most_frequent(), Some(("00", 4)));
    }

    #[test]
    fn test_get_counts_by_name() {
        let mut counts = Counts::new();
        counts.insert("1", 10);
        let result = ExecutionResult {
            backend_name: "sim".into(),
            backend_version: "0.1.0".into(),
            job_id: "job-1".into(),
            success: true,
            results: vec![ExperimentResult {
                name: "flip".into(),
                shots: 10,
                success: true,
                counts,
                status: "DONE".into(),
            }],
            date: Utc::now(),
            time_taken_ms: None,
        };

        assert_eq!(result.get_counts("flip").map(Counts::total_shots), Some(10));
        assert!(result.get_counts("missing").is_none());
        assert_eq!(result.counts().map(|c| c.get("1")), Some(10));
    }
}
