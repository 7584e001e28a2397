//! Fake hardware backend.

use async_trait::async_trait;
use tracing::{debug, instrument};

use arvak_adapter_sim::engine;
use arvak_hal::{
    Backend, BackendConfiguration, BackendProperties, BackendStatus, CompiledProgram,
    CompletedJob, HalResult, Job,
};

use crate::snapshot::FakeDevice;

/// A backend that looks like hardware but runs on the local engine.
///
/// Configuration and properties come from a bundled [`FakeDevice`]
/// snapshot, so compilation sees a real basis and coupling map while
/// execution stays noiseless and in-process.
pub struct FakeBackend {
    device: FakeDevice,
}

impl FakeBackend {
    /// Build from a bundled snapshot (`fake_linear5`, `fake_star5`).
    pub fn from_snapshot(name: &str) -> HalResult<Self> {
        Ok(Self::from_device(FakeDevice::load(name)?))
    }

    /// Build from an already loaded snapshot.
    pub fn from_device(device: FakeDevice) -> Self {
        Self { device }
    }

    /// Five qubits in a line, `cx` native.
    pub fn linear5() -> Self {
        Self::from_device(linear5_device())
    }

    /// Five qubits around a hub, `cz` native.
    pub fn star5() -> HalResult<Self> {
        Self::from_snapshot("fake_star5")
    }

    /// The underlying snapshot.
    pub fn device(&self) -> &FakeDevice {
        &self.device
    }
}

// Bundled data, covered by `snapshot::tests`.
fn linear5_device() -> FakeDevice {
    FakeDevice::load("fake_linear5").expect("bundled fake_linear5 snapshot is valid")
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::linear5()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn name(&self) -> &str {
        &self.device.configuration.backend_name
    }

    fn configuration(&self) -> HalResult<BackendConfiguration> {
        Ok(self.device.configuration.clone())
    }

    async fn properties(&self) -> HalResult<Option<BackendProperties>> {
        Ok(Some(self.device.properties.clone()))
    }

    async fn status(&self) -> HalResult<BackendStatus> {
        let config = &self.device.configuration;
        Ok(BackendStatus::active(
            &config.backend_name,
            &config.backend_version,
        ))
    }

    #[instrument(skip(self, program), fields(backend = %self.name(), program = %program.program_id))]
    async fn run(&self, program: CompiledProgram) -> HalResult<Box<dyn Job>> {
        let result = engine::execute(&program, &self.device.configuration)?;
        debug!("Fake job {} completed", result.job_id);
        Ok(Box::new(CompletedJob::succeeded(result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_linear5() {
        let backend = FakeBackend::default();
        assert_eq!(backend.name(), "fake_linear5");
        assert!(!backend.configuration().unwrap().simulator);
    }

    #[tokio::test]
    async fn test_reports_properties() {
        let backend = FakeBackend::star5().unwrap();
        let props = backend.properties().await.unwrap().unwrap();
        assert_eq!(props.qubits.len(), 5);
        assert_eq!(props.backend_name, "fake_star5");
    }

    #[tokio::test]
    async fn test_status_operational() {
        let status = FakeBackend::linear5().status().await.unwrap();
        assert!(status.operational);
    }
}
