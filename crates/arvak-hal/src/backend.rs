//! Backend trait.
//!
//! ```text
//!   configuration()   properties()   status()   run(program) ──→ Job ──→ result()
//!       (sync)           (async)      (async)        (async)              (async)
//! ```
//!
//! | Method | Kind | Returns |
//! |--------|------|---------|
//! | `name()` | sync | `&str` |
//! | `configuration()` | sync | `HalResult<BackendConfiguration>` |
//! | `properties()` | async | `HalResult<Option<BackendProperties>>` |
//! | `status()` | async | `HalResult<BackendStatus>` |
//! | `run()` | async | `HalResult<Box<dyn Job>>` |

use async_trait::async_trait;

use crate::configuration::BackendConfiguration;
use crate::error::HalResult;
use crate::job::Job;
use crate::program::CompiledProgram;
use crate::properties::BackendProperties;
use crate::status::BackendStatus;

/// An executable target for quantum programs, physical or simulated.
///
/// # Contract
///
/// - `configuration()` describes the backend. It MUST report
///   `simulator = true` for anything that is not physical hardware.
/// - `properties()` MUST return `None` for simulators, which have no
///   calibration. Physical backends SHOULD return their latest calibration.
/// - `status()` reports whether the backend is accepting jobs.
/// - `run()` accepts a program compiled against this backend's
///   configuration and returns a job handle.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Static description of the backend.
    fn configuration(&self) -> HalResult<BackendConfiguration>;

    /// Latest calibration data, or `None` when there is none.
    async fn properties(&self) -> HalResult<Option<BackendProperties>>;

    /// Operational status.
    async fn status(&self) -> HalResult<BackendStatus>;

    /// Submit a compiled program for execution.
    async fn run(&self, program: CompiledProgram) -> HalResult<Box<dyn Job>>;
}
