//! Calibration data reported by physical backends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-qubit calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QubitProperties {
    /// T1 relaxation time (microseconds).
    pub t1_us: f64,
    /// T2 dephasing time (microseconds).
    pub t2_us: f64,
    /// Qubit frequency (GHz).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_ghz: Option<f64>,
    /// Readout assignment error.
    pub readout_error: f64,
}

/// Per-gate calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateProperties {
    /// Gate name.
    pub gate: String,
    /// Qubits the calibration applies to.
    pub qubits: Vec<u32>,
    /// Average gate error.
    pub gate_error: f64,
    /// Gate duration (nanoseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_length_ns: Option<f64>,
}

/// Calibration snapshot of a physical backend.
///
/// Simulators have no physical calibration and report no properties at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendProperties {
    /// Backend name.
    pub backend_name: String,
    /// Backend version string.
    pub backend_version: String,
    /// When the calibration was taken.
    pub last_update_date: DateTime<Utc>,
    /// Per-qubit data, indexed by qubit.
    pub qubits: Vec<QubitProperties>,
    /// Per-gate data.
    #[serde(default)]
    pub gates: Vec<GateProperties>,
}

impl BackendProperties {
    /// Calibration for one qubit.
    pub fn qubit(&self, index: u32) -> Option<&QubitProperties> {
        self.qubits.get(index as usize)
    }

    /// Readout error of one qubit.
    pub fn readout_error(&self, index: u32) -> Option<f64> {
        self.qubit(index).map(|q| q.readout_error)
    }

    /// Error of `gate` on exactly `qubits` (order-sensitive).
    pub fn gate_error(&self, gate: &str, qubits: &[u32]) -> Option<f64> {
        self.gates
            .iter()
            .find(|g| g.gate == gate && g.qubits == qubits)
            .map(|g| g.gate_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BackendProperties {
        BackendProperties {
            backend_name: "dev".into(),
            backend_version: "1.0.0".into(),
            last_update_date: Utc::now(),
            qubits: vec![
                QubitProperties {
                    t1_us: 80.0,
                    t2_us: 60.0,
                    frequency_ghz: Some(5.1),
                    readout_error: 0.02,
                },
                QubitProperties {
                    t1_us: 70.0,
                    t2_us: 50.0,
                    frequency_ghz: None,
                    readout_error: 0.03,
                },
            ],
            gates: vec![GateProperties {
                gate: "cx".into(),
                qubits: vec![0, 1],
                gate_error: 0.011,
                gate_length_ns: Some(300.0),
            }],
        }
    }

    #[test]
    fn test_lookups() {
        let props = sample();
        assert_eq!(props.readout_error(1), Some(0.03));
        assert!(props.qubit(2).is_none());
        assert_eq!(props.gate_error("cx", &[0, 1]), Some(0.011));
        assert_eq!(props.gate_error("cx", &[1, 0]), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let props = sample();
        let json = serde_json::to_string(&props).unwrap();
        let back: BackendProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }
}
