//! Backends command implementation.

use anyhow::Result;
use console::style;

use super::common::registry;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    println!("{} Available backends:\n", style("Arvak").cyan().bold());

    let registry = registry();
    for name in registry.available_backends() {
        let backend = match registry.create(&name) {
            Ok(backend) => backend,
            Err(e) => {
                println!("  {} {} ({e})", style("○").red(), style(&name).dim());
                println!();
                continue;
            }
        };
        let config = backend.configuration()?;
        let available = backend.status().await.is_ok_and(|s| s.operational);

        println!(
            "  {} {} {}",
            if available {
                style("●").green()
            } else {
                style("○").red()
            },
            style(&name).bold(),
            if config.simulator { "(simulator)" } else { "(fake device)" }
        );
        println!("    Qubits: {}", config.n_qubits);
        println!("    Max shots: {}", config.max_shots);
        println!(
            "    Gates: {}",
            config
                .basis_gates
                .join(", ")
                .chars()
                .take(50)
                .collect::<String>()
        );
        if let Some(coupling) = &config.coupling_map {
            println!("    Coupling: {} edges", coupling.len());
        }
        println!();
    }

    Ok(())
}
