//! Built-in compilation passes.
//!
//! All built-in passes are target-specific: they read the backend's
//! [`BackendConfiguration`](arvak_hal::BackendConfiguration).

pub mod target;

pub use target::{BasisTranslation, CheckConnectivity, CheckQubitCount};
