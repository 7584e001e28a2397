//! Static backend configuration.
//!
//! A [`BackendConfiguration`] is the descriptive half of a backend: its
//! width, native gates, connectivity and whether it is a simulator. It
//! changes only when the backend itself is redeployed, unlike
//! [`BackendProperties`](crate::properties::BackendProperties) which
//! follow each calibration cycle.

use serde::{Deserialize, Serialize};

use arvak_ir::StandardGate;

/// Descriptive data about a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfiguration {
    /// Backend name.
    pub backend_name: String,
    /// Backend version string.
    pub backend_version: String,
    /// Number of qubits.
    pub n_qubits: u32,
    /// Native gates by OpenQASM name. An empty list accepts every gate.
    pub basis_gates: Vec<String>,
    /// Directed coupling edges. `None` means all-to-all connectivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupling_map: Option<Vec<(u32, u32)>>,
    /// Whether this backend is a simulator (`true`) or physical hardware.
    pub simulator: bool,
    /// Whether the backend runs in-process.
    pub local: bool,
    /// Whether classically conditioned operations are supported.
    #[serde(default)]
    pub conditional: bool,
    /// Whether per-shot memory can be returned.
    #[serde(default)]
    pub memory: bool,
    /// Maximum shots per experiment.
    pub max_shots: u32,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BackendConfiguration {
    /// Configuration for an in-process simulator supporting every standard gate.
    pub fn simulator(name: impl Into<String>, n_qubits: u32) -> Self {
        Self {
            backend_name: name.into(),
            backend_version: env!("CARGO_PKG_VERSION").into(),
            n_qubits,
            basis_gates: StandardGate::NAMES.iter().map(|g| (*g).to_string()).collect(),
            coupling_map: None,
            simulator: true,
            local: true,
            conditional: false,
            memory: true,
            max_shots: 100_000,
            description: Some("Local statevector simulator".into()),
        }
    }

    /// Configuration for a physical device.
    pub fn device(
        name: impl Into<String>,
        n_qubits: u32,
        basis_gates: impl IntoIterator<Item = impl Into<String>>,
        coupling_map: Vec<(u32, u32)>,
    ) -> Self {
        Self {
            backend_name: name.into(),
            backend_version: "1.0.0".into(),
            n_qubits,
            basis_gates: basis_gates.into_iter().map(Into::into).collect(),
            coupling_map: Some(coupling_map),
            simulator: false,
            local: false,
            conditional: false,
            memory: false,
            max_shots: 8192,
            description: None,
        }
    }

    /// Whether `gate` can run without translation.
    pub fn supports_gate(&self, gate: &str) -> bool {
        self.basis_gates.is_empty() || self.basis_gates.iter().any(|g| g == gate)
    }

    /// Whether qubits `a` and `b` share a coupling edge, in either direction.
    pub fn is_connected(&self, a: u32, b: u32) -> bool {
        match &self.coupling_map {
            None => true,
            Some(edges) => edges
                .iter()
                .any(|&(x, y)| (x, y) == (a, b) || (y, x) == (a, b)),
        }
    }
}

/// Nearest-neighbour chain `0-1-…-(n-1)`.
pub fn linear_coupling(n: u32) -> Vec<(u32, u32)> {
    (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect()
}

/// Star with qubit 0 at the centre.
pub fn star_coupling(n: u32) -> Vec<(u32, u32)> {
    (1..n).map(|i| (0, i)).collect()
}
