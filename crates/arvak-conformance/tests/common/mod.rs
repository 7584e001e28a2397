//! Deliberately misbehaving backends.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;

use arvak_adapter_sim::SimulatorBackend;
use arvak_hal::{
    Backend, BackendConfiguration, BackendProperties, BackendStatus, CompiledProgram,
    CompletedJob, HalError, HalResult, Job, QubitProperties,
};

pub fn calibration(name: &str, n: usize) -> BackendProperties {
    BackendProperties {
        backend_name: name.into(),
        backend_version: "0.0.1".into(),
        last_update_date: Utc::now(),
        qubits: vec![
            QubitProperties {
                t1_us: 100.0,
                t2_us: 80.0,
                frequency_ghz: None,
                readout_error: 0.02,
            };
            n
        ],
        gates: vec![],
    }
}

/// Which contract to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// A simulator that reports calibration properties.
    SimulatorWithProperties,
    /// Jobs finish with `success = false`.
    UnsuccessfulJob,
    /// Jobs fail before producing a result.
    FailedJob,
    /// `status()` raises.
    StatusError,
    /// `configuration()` raises.
    ConfigurationError,
    /// Hardware that reports no calibration at all.
    HardwareWithoutProperties,
    /// A basis the compiler cannot target.
    UntranslatableBasis,
}

/// Wraps the simulator and breaks one part of the contract.
pub struct FaultyBackend {
    inner: SimulatorBackend,
    fault: Fault,
}

impl FaultyBackend {
    pub fn new(fault: Fault) -> Self {
        Self {
            inner: SimulatorBackend::with_max_qubits(4),
            fault,
        }
    }
}

#[async_trait]
impl Backend for FaultyBackend {
    fn name(&self) -> &str {
        "faulty"
    }

    fn configuration(&self) -> HalResult<BackendConfiguration> {
        let mut config = self.inner.configuration()?;
        config.backend_name = "faulty".into();
        match self.fault {
            Fault::ConfigurationError => {
                return Err(HalError::Configuration("configuration store offline".into()));
            }
            Fault::HardwareWithoutProperties => config.simulator = false,
            Fault::UntranslatableBasis => {
                config.basis_gates = vec!["rx".into(), "ry".into(), "cz".into()];
            }
            _ => {}
        }
        Ok(config)
    }

    async fn properties(&self) -> HalResult<Option<BackendProperties>> {
        match self.fault {
            Fault::SimulatorWithProperties => Ok(Some(calibration("faulty", 4))),
            _ => Ok(None),
        }
    }

    async fn status(&self) -> HalResult<BackendStatus> {
        match self.fault {
            Fault::StatusError => Err(HalError::BackendUnavailable("status endpoint 503".into())),
            _ => Ok(BackendStatus::active("faulty", "0.0.1")),
        }
    }

    async fn run(&self, program: CompiledProgram) -> HalResult<Box<dyn Job>> {
        match self.fault {
            Fault::UnsuccessfulJob => {
                let mut result = self.inner.run(program).await?.result().await?;
                result.success = false;
                for experiment in &mut result.results {
                    experiment.success = false;
                    experiment.status = "ERROR".into();
                }
                Ok(Box::new(CompletedJob::succeeded(result)))
            }
            Fault::FailedJob => Ok(Box::new(CompletedJob::failed(
                "job-lost".into(),
                "controller reset",
            ))),
            _ => self.inner.run(program).await,
        }
    }
}
