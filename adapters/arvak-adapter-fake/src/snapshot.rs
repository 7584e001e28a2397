//! Bundled device snapshots.

use serde::{Deserialize, Serialize};

use arvak_hal::{BackendConfiguration, BackendProperties, HalError, HalResult};

const SNAPSHOTS: &[(&str, &str)] = &[
    (
        "fake_linear5",
        include_str!("../snapshots/fake_linear5.json"),
    ),
    ("fake_star5", include_str!("../snapshots/fake_star5.json")),
];

/// A frozen description of a physical device: its configuration plus one
/// calibration cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FakeDevice {
    /// Static configuration. `simulator` is always `false`.
    pub configuration: BackendConfiguration,
    /// Calibration data.
    pub properties: BackendProperties,
}

impl FakeDevice {
    /// Names of every bundled snapshot.
    pub fn names() -> impl Iterator<Item = &'static str> {
        SNAPSHOTS.iter().map(|(name, _)| *name)
    }

    /// Load a bundled snapshot by name.
    pub fn load(name: &str) -> HalResult<Self> {
        let (_, json) = SNAPSHOTS
            .iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| HalError::Configuration(format!("unknown fake device '{name}'")))?;
        Self::from_json(json)
    }

    /// Parse a snapshot and check that it describes hardware.
    pub fn from_json(json: &str) -> HalResult<Self> {
        let device: Self = serde_json::from_str(json)?;
        if device.configuration.simulator {
            return Err(HalError::Configuration(format!(
                "snapshot '{}' is marked as a simulator",
                device.configuration.backend_name
            )));
        }
        if device.properties.qubits.len() != device.configuration.n_qubits as usize {
            return Err(HalError::Configuration(format!(
                "snapshot '{}' has calibration for {} of {} qubits",
                device.configuration.backend_name,
                device.properties.qubits.len(),
                device.configuration.n_qubits
            )));
        }
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bundled_snapshot_loads() {
        for name in FakeDevice::names() {
            let device = FakeDevice::load(name).unwrap();
            assert_eq!(device.configuration.backend_name, name);
            assert_eq!(device.properties.backend_name, name);
            assert!(!device.configuration.simulator);
        }
    }

    #[test]
    fn test_linear5_layout() {
        let device = FakeDevice::load("fake_linear5").unwrap();
        let config = &device.configuration;
        assert_eq!(config.n_qubits, 5);
        assert!(config.is_connected(3, 4));
        assert!(!config.is_connected(0, 2));
        assert!(config.supports_gate("cx"));
        assert!(!config.supports_gate("cz"));
    }

    #[test]
    fn test_star5_calibration() {
        let device = FakeDevice::load("fake_star5").unwrap();
        assert!(device.configuration.is_connected(4, 0));
        assert!(!device.configuration.is_connected(1, 2));
        assert!(device.properties.gate_error("cz", &[0, 3]).is_some());
        assert!(device.properties.readout_error(2).unwrap() > 0.0);
    }

    #[test]
    fn test_unknown_device() {
        assert!(matches!(
            FakeDevice::load("fake_nowhere"),
            Err(HalError::Configuration(_))
        ));
    }

    #[test]
    fn test_simulator_snapshot_rejected() {
        let mut device = FakeDevice::load("fake_linear5").unwrap();
        device.configuration.simulator = true;
        let json = serde_json::to_string(&device).unwrap();
        assert!(FakeDevice::from_json(&json).is_err());
    }
}
