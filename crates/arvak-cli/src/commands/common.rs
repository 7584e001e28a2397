//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};

use arvak_adapter_fake::FakeBackend;
use arvak_adapter_sim::SimulatorBackend;
use arvak_conformance::SuiteConfig;
use arvak_hal::{Backend, BackendRegistry};

/// Every backend the CLI knows by name.
pub fn registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register::<SimulatorBackend>("simulator");
    registry.register_factory("fake_linear5", || {
        Ok(Box::new(FakeBackend::linear5()) as Box<dyn Backend>)
    });
    registry.register_factory("fake_star5", || {
        Ok(Box::new(FakeBackend::star5()?) as Box<dyn Backend>)
    });
    registry
}

/// Check that `name` is registered, listing the alternatives if not.
pub fn require_backend(registry: &BackendRegistry, name: &str) -> Result<()> {
    if !registry.has_backend(name) {
        anyhow::bail!(
            "Unknown backend: '{name}'. Available: {}",
            registry.available_backends().join(", ")
        );
    }
    Ok(())
}

/// Build the suite configuration: file (or default file), environment,
/// then command-line overrides.
pub fn load_config(
    path: Option<&Path>,
    shots: Option<u32>,
    seed: Option<u64>,
) -> Result<SuiteConfig> {
    let mut config = SuiteConfig::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load suite configuration from {}", p.display()),
        None => "Failed to load suite configuration".to_string(),
    })?;

    if let Some(shots) = shots {
        config.shots = shots;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate().context("Invalid suite configuration")?;
    Ok(config)
}
