//! Arvak Hardware Abstraction Layer
//!
//! The minimal contract a quantum backend must satisfy to pass the
//! conformance suite: report its configuration, its calibration
//! properties and its status, and run a compiled program to a result.
//!
//! # Implementing a Backend
//!
//! ```ignore
//! use arvak_hal::{
//!     Backend, BackendConfiguration, BackendProperties, BackendStatus,
//!     CompiledProgram, HalResult, Job,
//! };
//! use async_trait::async_trait;
//!
//! struct MyBackend {
//!     configuration: BackendConfiguration,
//! }
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str { &self.configuration.backend_name }
//!
//!     fn configuration(&self) -> HalResult<BackendConfiguration> {
//!         Ok(self.configuration.clone())
//!     }
//!
//!     async fn properties(&self) -> HalResult<Option<BackendProperties>> {
//!         Ok(None)
//!     }
//!
//!     async fn status(&self) -> HalResult<BackendStatus> {
//!         Ok(BackendStatus::active(self.name(), "1.0.0"))
//!     }
//!
//!     async fn run(&self, program: CompiledProgram) -> HalResult<Box<dyn Job>> {
//!         // Hand the program to the hardware
//!         # todo!()
//!     }
//! }
//! ```

pub mod backend;
pub mod configuration;
pub mod error;
pub mod job;
pub mod program;
pub mod properties;
pub mod registry;
pub mod result;
pub mod status;

pub use backend::Backend;
pub use configuration::{BackendConfiguration, linear_coupling, star_coupling};
pub use error::{HalError, HalResult};
pub use job::{CompletedJob, Job, JobId, JobStatus};
pub use program::{CompiledExperiment, CompiledProgram, RunConfig};
pub use properties::{BackendProperties, GateProperties, QubitProperties};
pub use registry::{BackendFactory, BackendRegistry};
pub use result::{Counts, ExecutionResult, ExperimentResult};
pub use status::BackendStatus;
