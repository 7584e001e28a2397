//! Operational status of a backend.

use serde::{Deserialize, Serialize};

/// Point-in-time status of a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    /// Backend name.
    pub backend_name: String,
    /// Backend version string.
    pub backend_version: String,
    /// Whether the backend is accepting jobs.
    pub operational: bool,
    /// Jobs waiting ahead of a new submission.
    pub pending_jobs: u32,
    /// Human-readable status message.
    pub status_msg: String,
}

impl BackendStatus {
    /// Status of a backend that is accepting jobs with an empty queue.
    pub fn active(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            backend_name: name.into(),
            backend_version: version.into(),
            operational: true,
            pending_jobs: 0,
            status_msg: "active".into(),
        }
    }

    /// Status of a backend that is offline.
    pub fn offline(
        name: impl Into<String>,
        version: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            backend_name: name.into(),
            backend_version: version.into(),
            operational: false,
            pending_jobs: 0,
            status_msg: reason.into(),
        }
    }
}
