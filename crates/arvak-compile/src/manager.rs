//! Pass manager for orchestrating compilation.

use tracing::{debug, instrument};

use arvak_hal::BackendConfiguration;
use arvak_ir::Circuit;

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{BasisTranslation, CheckConnectivity, CheckQubitCount};

/// Manages and executes a sequence of compilation passes.
pub struct PassManager {
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// The standard pipeline for a target: width check, basis translation,
    /// connectivity check.
    pub fn for_target() -> Self {
        let mut pm = Self::new();
        pm.add_pass(CheckQubitCount);
        pm.add_pass(BasisTranslation);
        pm.add_pass(CheckConnectivity);
        pm
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes on `circuit` for `target`.
    #[instrument(skip_all, fields(circuit = circuit.name(), target = %target.backend_name))]
    pub fn run(&self, circuit: &mut Circuit, target: &BackendConfiguration) -> CompileResult<()> {
        for pass in &self.passes {
            if pass.should_run(circuit, target) {
                debug!("Running pass: {}", pass.name());
                pass.run(circuit, target)?;
                debug!("Pass {} completed, ops: {}", pass.name(), circuit.num_ops());
            } else {
                debug!("Skipping pass: {}", pass.name());
            }
        }
        Ok(())
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arvak_ir::QubitId;

    #[test]
    fn test_empty_pass_manager() {
        let pm = PassManager::new();
        assert!(pm.is_empty());
        assert_eq!(pm.len(), 0);
    }

    #[test]
    fn test_empty_manager_leaves_circuit() {
        let pm = PassManager::new();
        let target = BackendConfiguration::simulator("sim", 2);

        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        let before = circuit.clone();

        pm.run(&mut circuit, &target).unwrap();
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_standard_pipeline() {
        assert_eq!(PassManager::for_target().len(), 3);
    }
}
