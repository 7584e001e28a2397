//! Simulator backend implementation.

use async_trait::async_trait;
use tracing::{debug, instrument};

use arvak_hal::{
    Backend, BackendConfiguration, BackendProperties, BackendStatus, CompiledProgram,
    CompletedJob, HalResult, Job,
};

use crate::engine::{self, MAX_SIM_QUBITS};

/// Local simulator backend.
///
/// This backend simulates quantum circuits using a statevector simulation.
/// It supports circuits up to ~20 qubits (limited by memory).
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfiguration,
}

impl SimulatorBackend {
    /// Default register width.
    pub const DEFAULT_MAX_QUBITS: u32 = 20;

    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(Self::DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits, capped at the engine limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfiguration::simulator("simulator", max_qubits.min(MAX_SIM_QUBITS)),
        }
    }

    /// Maximum number of qubits supported.
    pub fn max_qubits(&self) -> u32 {
        self.config.n_qubits
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.backend_name
    }

    fn configuration(&self) -> HalResult<BackendConfiguration> {
        Ok(self.config.clone())
    }

    async fn properties(&self) -> HalResult<Option<BackendProperties>> {
        Ok(None)
    }

    async fn status(&self) -> HalResult<BackendStatus> {
        Ok(BackendStatus::active(
            &self.config.backend_name,
            &self.config.backend_version,
        ))
    }

    #[instrument(skip(self, program), fields(program = %program.program_id))]
    async fn run(&self, program: CompiledProgram) -> HalResult<Box<dyn Job>> {
        // Runs inline; the returned job is already terminal.
        let result = engine::execute(&program, &self.config)?;
        debug!("Submitted job: {}", result.job_id);
        Ok(Box::new(CompletedJob::succeeded(result)))
    }
}
