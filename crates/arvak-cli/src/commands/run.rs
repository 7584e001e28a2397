//! Run command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use arvak_conformance::{CheckOutcome, ConformanceSuite, SuiteConfig, SuiteReport};
use arvak_hal::BackendRegistry;

use super::common::{load_config, registry, require_backend};

/// Execute the run command.
pub async fn execute(
    backend: &str,
    config_path: Option<&Path>,
    shots: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let config = load_config(config_path, shots, seed)?;
    debug!(?config, "Loaded suite configuration");
    check_backend(&registry(), backend, config).await
}

/// Run the suite against `backend` and fail unless it is conformant.
async fn check_backend(registry: &BackendRegistry, backend: &str, config: SuiteConfig) -> Result<()> {
    require_backend(registry, backend)?;

    println!(
        "{} Checking {} ({} checks, {} shots)",
        style("→").cyan().bold(),
        style(backend).yellow(),
        config.checks.len(),
        config.shots
    );

    let suite = ConformanceSuite::from_factory(backend, registry.factory(backend)?).with_config(config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Running checks...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = suite
        .run_all_with(|check, outcome| spinner.suspend(|| print_outcome(check.name(), outcome)))
        .await;
    spinner.finish_and_clear();

    print_summary(&report);

    if !report.is_conformant() {
        anyhow::bail!("Backend '{backend}' is not conformant");
    }
    Ok(())
}

fn print_outcome(name: &str, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Passed(_) => println!("  {} {}", style("✓").green().bold(), name),
        CheckOutcome::Failed(err) => println!(
            "  {} {}: {}",
            style("✗").red().bold(),
            name,
            style(err).red()
        ),
        CheckOutcome::Skipped(reason) => {
            println!("  {} {} ({})", style("-").yellow(), name, style(reason).dim())
        }
    }
}

fn print_summary(report: &SuiteReport) {
    println!();
    let verdict = if report.is_conformant() {
        style("CONFORMANT").green().bold()
    } else {
        style("NOT CONFORMANT").red().bold()
    };
    println!(
        "{} {}: {} passed, {} failed, {} skipped",
        verdict,
        report.suite,
        report.passed(),
        report.failed(),
        report.skipped()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    use arvak_hal::HalError;

    fn config() -> SuiteConfig {
        SuiteConfig {
            shots: 64,
            seed: Some(3),
            ..SuiteConfig::default()
        }
    }

    #[tokio::test]
    async fn test_conformant_backend_succeeds() {
        check_backend(&registry(), "fake_star5", config()).await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_backend_is_an_error() {
        let mut registry = registry();
        registry.register_factory("unreachable", || {
            Err(HalError::BackendUnavailable("no route to device".into()))
        });

        let err = check_backend(&registry, "unreachable", config()).await.unwrap_err();
        assert!(err.to_string().contains("not conformant"));
    }

    #[tokio::test]
    async fn test_unknown_backend_is_an_error() {
        let err = check_backend(&registry(), "ibm_torino", config()).await.unwrap_err();
        assert!(err.to_string().contains("Unknown backend"));
    }
}
