//! Arvak backend conformance kit.
//!
//! A reusable template of smoke checks that any [`Backend`] implementation
//! can be run against:
//!
//! | Check | Passes when |
//! |-------|-------------|
//! | `test_configuration` | `configuration()` returns |
//! | `test_properties` | `properties()` returns; simulators report `None` |
//! | `test_status` | `status()` returns |
//! | `test_run_circuit` | the Bell reference circuit compiles, runs and reports success |
//!
//! The template itself is abstract. Running it unspecialised skips every
//! check instead of reporting a pass or a failure:
//!
//! ```ignore
//! let report = ConformanceSuite::abstract_template().run_all().await;
//! assert_eq!(report.skipped(), 4);
//! ```
//!
//! Specialise it with a backend type or a factory, either directly or via
//! [`backend_conformance_tests!`] in a backend crate's test suite:
//!
//! ```ignore
//! let report = ConformanceSuite::for_backend::<SimulatorBackend>().run_all().await;
//! report.assert_conformant();
//!
//! backend_conformance_tests!(fake_linear5, FakeBackend::linear5());
//! ```
//!
//! [`Backend`]: arvak_hal::Backend

pub mod check;
pub mod config;
pub mod error;
mod logging;
mod macros;
pub mod outcome;
pub mod reference;
pub mod report;
pub mod suite;

pub use check::Check;
pub use config::{ConfigError, SuiteConfig};
pub use error::{ConformanceError, ConformanceResult, SetupError};
pub use logging::{LOG_ENV, init_test_logging};
pub use outcome::{CheckOutcome, Evidence};
pub use reference::{REFERENCE_CIRCUIT, ReferenceCircuits};
pub use report::SuiteReport;
pub use suite::ConformanceSuite;

#[doc(hidden)]
pub mod __private {
    pub use arvak_hal::{Backend, HalResult};
}
