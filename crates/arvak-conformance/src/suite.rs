//! The backend conformance template.

use std::sync::{Arc, LazyLock};

use tracing::{info, instrument, warn};

use arvak_compile::{CompileOptions, compile};
use arvak_hal::{
    Backend, BackendConfiguration, BackendFactory, BackendProperties, BackendStatus,
    ExecutionResult, HalResult,
};
use arvak_ir::Circuit;

use crate::check::Check;
use crate::config::SuiteConfig;
use crate::error::{ConformanceError, ConformanceResult, SetupError};
use crate::outcome::{CheckOutcome, Evidence};
use crate::reference::REFERENCE_CIRCUIT;
use crate::report::SuiteReport;

const ABSTRACT_REASON: &str =
    "abstract backend template; specialise it with a concrete backend factory";

/// A parameterisable battery of backend checks.
///
/// The unspecialised template ([`ConformanceSuite::abstract_template`])
/// never runs: every check reports as skipped. Specialise it with
/// [`for_backend`](ConformanceSuite::for_backend) or
/// [`with_factory`](ConformanceSuite::with_factory). Each check gets a
/// freshly constructed backend.
#[derive(Clone)]
pub struct ConformanceSuite {
    name: String,
    is_abstract: bool,
    factory: Option<BackendFactory>,
    circuit: &'static Circuit,
    config: SuiteConfig,
}

impl std::fmt::Debug for ConformanceSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConformanceSuite")
            .field("name", &self.name)
            .field("is_abstract", &self.is_abstract)
            .field("circuit", &self.circuit.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ConformanceSuite {
    /// The unspecialised template.
    pub fn abstract_template() -> Self {
        Self {
            name: "BackendConformance".into(),
            is_abstract: true,
            factory: None,
            circuit: LazyLock::force(&REFERENCE_CIRCUIT),
            config: SuiteConfig::default(),
        }
    }

    /// Specialise with a backend type constructed through `Default`.
    pub fn for_backend<B>() -> Self
    where
        B: Backend + Default + 'static,
    {
        let name = std::any::type_name::<B>()
            .rsplit("::")
            .next()
            .unwrap_or("backend");
        Self::with_factory(name, || Ok(Box::new(B::default()) as Box<dyn Backend>))
    }

    /// Specialise with an explicit factory.
    pub fn with_factory<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> HalResult<Box<dyn Backend>> + Send + Sync + 'static,
    {
        Self::from_factory(name, Arc::new(factory))
    }

    /// Specialise with a shared factory, e.g. one taken from a
    /// [`BackendRegistry`](arvak_hal::BackendRegistry).
    pub fn from_factory(name: impl Into<String>, factory: BackendFactory) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            factory: Some(factory),
            ..Self::abstract_template()
        }
    }

    /// Replace the run configuration.
    pub fn with_config(mut self, config: SuiteConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the circuit used by the run check.
    pub fn with_circuit(mut self, circuit: &'static Circuit) -> Self {
        self.circuit = circuit;
        self
    }

    /// Suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the unspecialised template.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Active configuration.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Circuit used by the run check.
    pub fn circuit(&self) -> &'static Circuit {
        self.circuit
    }

    /// Construct a fresh backend for one check.
    pub fn setup(&self) -> Result<Box<dyn Backend>, SetupError> {
        if self.is_abstract {
            return Err(SetupError::Skip(ABSTRACT_REASON.into()));
        }
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| SetupError::Skip("no backend factory configured".into()))?;
        factory().map_err(SetupError::Factory)
    }

    /// Run one check against a fresh backend.
    #[instrument(skip_all, fields(suite = %self.name, check = check.name()))]
    pub async fn run_check(&self, check: Check) -> CheckOutcome {
        let backend = match self.setup() {
            Ok(backend) => backend,
            Err(SetupError::Skip(reason)) => {
                warn!(%reason, "Check skipped");
                return CheckOutcome::Skipped(reason);
            }
            Err(SetupError::Factory(err)) => {
                info!(error = %err, "Check failed during setup");
                return CheckOutcome::Failed(ConformanceError::Factory(err));
            }
        };

        let outcome = match self.execute(check, backend.as_ref()).await {
            Ok(evidence) => CheckOutcome::Passed(evidence),
            Err(err) => CheckOutcome::Failed(err),
        };
        match &outcome {
            CheckOutcome::Failed(err) => info!(backend = backend.name(), error = %err, "Check failed"),
            _ => info!(backend = backend.name(), "Check passed"),
        }
        outcome
    }

    /// Run every configured check in order.
    pub async fn run_all(&self) -> SuiteReport {
        self.run_all_with(|_, _| {}).await
    }

    /// Run every configured check in order, reporting each outcome to
    /// `on_outcome` as soon as it is known.
    pub async fn run_all_with<F>(&self, mut on_outcome: F) -> SuiteReport
    where
        F: FnMut(Check, &CheckOutcome),
    {
        let mut outcomes = Vec::with_capacity(self.config.checks.len());
        for &check in &self.config.checks {
            let outcome = self.run_check(check).await;
            on_outcome(check, &outcome);
            outcomes.push((check, outcome));
        }
        SuiteReport {
            suite: self.name.clone(),
            outcomes,
        }
    }

    /// Run one check and panic unless it passes. A skip returns `None`.
    pub async fn expect_pass(&self, check: Check) -> Option<Evidence> {
        match self.run_check(check).await {
            CheckOutcome::Passed(evidence) => Some(evidence),
            CheckOutcome::Skipped(reason) => {
                warn!("{} skipped for '{}': {reason}", check.name(), self.name);
                None
            }
            CheckOutcome::Failed(err) => {
                panic!("{} failed for '{}': {err}", check.name(), self.name)
            }
        }
    }

    async fn execute(&self, check: Check, backend: &dyn Backend) -> ConformanceResult<Evidence> {
        Ok(match check {
            Check::Configuration => Evidence::Configuration(self.test_configuration(backend)?),
            Check::Properties => Evidence::Properties(self.test_properties(backend).await?),
            Check::Status => Evidence::Status(self.test_status(backend).await?),
            Check::RunCircuit => Evidence::Execution(self.test_run_circuit(backend).await?),
        })
    }

    /// The configuration accessor returns.
    pub fn test_configuration(
        &self,
        backend: &dyn Backend,
    ) -> ConformanceResult<BackendConfiguration> {
        Ok(backend.configuration()?)
    }

    /// The properties accessor returns, and a simulator reports none.
    pub async fn test_properties(
        &self,
        backend: &dyn Backend,
    ) -> ConformanceResult<Option<BackendProperties>> {
        let properties = backend.properties().await?;
        if backend.configuration()?.simulator && properties.is_some() {
            return Err(ConformanceError::Assertion {
                check: Check::Properties,
                message: format!(
                    "simulator '{}' reported calibration properties; expected none",
                    backend.name()
                ),
            });
        }
        Ok(properties)
    }

    /// The status accessor returns.
    pub async fn test_status(&self, backend: &dyn Backend) -> ConformanceResult<BackendStatus> {
        Ok(backend.status().await?)
    }

    /// The reference circuit compiles, runs to completion and reports success.
    pub async fn test_run_circuit(
        &self,
        backend: &dyn Backend,
    ) -> ConformanceResult<ExecutionResult> {
        let options = CompileOptions {
            shots: self.config.shots,
            seed: self.config.seed,
            memory: false,
        };
        let program = compile(self.circuit, backend, &options)?;
        let job = backend.run(program).await?;
        let result = job.result().await?;
        if !result.success {
            return Err(ConformanceError::Assertion {
                check: Check::RunCircuit,
                message: format!(
                    "job {} on '{}' finished with success = false",
                    result.job_id,
                    backend.name()
                ),
            });
        }
        Ok(result)
    }
}
