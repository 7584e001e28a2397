//! Show command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use arvak_hal::{BackendConfiguration, BackendProperties, BackendStatus};

use super::common::{registry, require_backend};
use crate::OutputFormat;

/// Everything a backend reports about itself.
#[derive(Debug, Serialize)]
struct BackendDescription {
    configuration: BackendConfiguration,
    properties: Option<BackendProperties>,
    status: BackendStatus,
}

/// Execute the show command.
pub async fn execute(backend: &str, format: OutputFormat) -> Result<()> {
    let registry = registry();
    require_backend(&registry, backend)?;
    let instance = registry.create(backend)?;
    debug!(backend, "Describing backend");

    let description = BackendDescription {
        configuration: instance
            .configuration()
            .context("configuration() failed")?,
        properties: instance.properties().await.context("properties() failed")?,
        status: instance.status().await.context("status() failed")?,
    };

    println!("{}", render(&description, format)?);
    Ok(())
}

fn render(description: &BackendDescription, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(description)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(description)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arvak_hal::Backend;

    #[tokio::test]
    async fn test_render_fake_device() {
        let backend = registry().create("fake_linear5").unwrap();
        let description = BackendDescription {
            configuration: backend.configuration().unwrap(),
            properties: backend.properties().await.unwrap(),
            status: backend.status().await.unwrap(),
        };

        let json = render(&description, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["configuration"]["backend_name"], "fake_linear5");
        assert_eq!(value["properties"]["qubits"].as_array().unwrap().len(), 5);

        let yaml = render(&description, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("backend_name: fake_linear5"));
    }

    #[tokio::test]
    async fn test_render_simulator_has_null_properties() {
        let backend = registry().create("simulator").unwrap();
        let description = BackendDescription {
            configuration: backend.configuration().unwrap(),
            properties: backend.properties().await.unwrap(),
            status: backend.status().await.unwrap(),
        };

        let json = render(&description, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["properties"].is_null());
        assert_eq!(value["configuration"]["simulator"], true);
        assert_eq!(value["status"]["operational"], true);
    }
}
