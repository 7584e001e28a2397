//! Job handles.
//!
//! The job state machine:
//!
//! ```text
//!   run() ──→ Queued ──→ Running ──→ Completed
//!               │           │
//!               │           ├──→ Failed(reason)
//!               │           │
//!               └───────────┴──→ Cancelled
//! ```
//!
//! Transitions are monotonic and terminal states are permanent.
//! [`Job::result`] waits for a terminal state; there is no timeout.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};
use crate::result::ExecutionResult;

/// Unique identifier for a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Create a new job ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Status of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Job is waiting in queue.
    Queued,
    /// Job is currently running.
    Running,
    /// Job completed successfully.
    Completed,
    /// Job failed with an error message.
    Failed(String),
    /// Job was cancelled.
    Cancelled,
}

impl JobStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::Failed(_) | JobStatus::Cancelled
        )
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Queued => write!(f, "Queued"),
            JobStatus::Running => write!(f, "Running"),
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Failed(msg) => write!(f, "Failed: {msg}"),
            JobStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Handle to a submitted program.
#[async_trait]
pub trait Job: Send + Sync {
    /// The job identifier.
    fn job_id(&self) -> &JobId;

    /// Current status.
    async fn status(&self) -> HalResult<JobStatus>;

    /// Wait for the job to finish and return its result.
    ///
    /// A job that ends `Failed` or `Cancelled` yields an error rather than a
    /// result.
    async fn result(&self) -> HalResult<ExecutionResult>;
}

/// A job that reached a terminal state before it was handed out.
///
/// In-process backends execute synchronously inside `run` and return one
/// of these.
#[derive(Debug, Clone)]
pub struct CompletedJob {
    id: JobId,
    status: JobStatus,
    result: Option<ExecutionResult>,
    finished_at: DateTime<Utc>,
}

impl CompletedJob {
    /// A job that finished with `result`. The job id is taken from the result.
    pub fn succeeded(result: ExecutionResult) -> Self {
        Self {
            id: JobId::new(result.job_id.clone()),
            status: JobStatus::Completed,
            result: Some(result),
            finished_at: Utc::now(),
        }
    }

    /// A job that failed before producing a result.
    pub fn failed(id: JobId, reason: impl Into<String>) -> Self {
        Self {
            id,
            status: JobStatus::Failed(reason.into()),
            result: None,
            finished_at: Utc::now(),
        }
    }

    /// When the job reached its terminal state.
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}

#[async_trait]
impl Job for CompletedJob {
    fn job_id(&self) -> &JobId {
        &self.id
    }

    async fn status(&self) -> HalResult<JobStatus> {
        Ok(self.status.clone())
    }

    async fn result(&self) -> HalResult<ExecutionResult> {
        match &self.status {
            JobStatus::Completed => self
                .result
                .clone()
                .ok_or_else(|| HalError::JobNotFound(self.id.0.clone())),
            JobStatus::Failed(msg) => Err(HalError::JobFailed(msg.clone())),
            JobStatus::Cancelled => Err(HalError::JobCancelled),
            JobStatus::Queued | JobStatus::Running => Err(HalError::Backend(format!(
                "job {} has no result yet",
                self.id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(job_id: &str) -> ExecutionResult {
        ExecutionResult {
            backend_name: "sim".into(),
            backend_version: "0.1.0".into(),
            job_id: job_id.into(),
            success: true,
            results: vec![],
            date: Utc::now(),
            time_taken_ms: Some(1),
        }
    }

    #[test]
    fn test_job_status_terminal() {
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Running.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed("error".into()).is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
    }

    #[tokio::test]
    async fn test_completed_job_returns_result() {
        let job = CompletedJob::succeeded(result("job-123"));
        assert_eq!(job.job_id().0, "job-123");
        assert_eq!(job.status().await.unwrap(), JobStatus::Completed);
        assert!(job.result().await.unwrap().success);
    }

    #[tokio::test]
    async fn test_failed_job_raises() {
        let job = CompletedJob::failed(JobId::from("job-9"), "calibration drift");
        assert!(matches!(job.status().await.unwrap(), JobStatus::Failed(_)));
        let err = job.result().await.unwrap_err();
        assert!(matches!(err, HalError::JobFailed(msg) if msg == "calibration drift"));
    }
}
