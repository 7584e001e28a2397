//! Backend-ready programs produced by the compiler.

use serde::{Deserialize, Serialize};

use arvak_ir::Instruction;

/// Run-level settings shared by every experiment in a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Shots per experiment.
    pub shots: u32,
    /// Sampling seed, for backends that support deterministic runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Whether per-shot memory was requested.
    #[serde(default)]
    pub memory: bool,
    /// Widest experiment, in qubits.
    pub n_qubits: u32,
    /// Widest experiment, in classical bits.
    pub memory_slots: u32,
}

/// One compiled circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledExperiment {
    /// Name of the source circuit.
    pub name: String,
    /// Qubits used.
    pub num_qubits: u32,
    /// Classical bits used.
    pub num_clbits: u32,
    /// Instructions in the backend's native gate set.
    pub instructions: Vec<Instruction>,
}

/// A batch of compiled experiments bound to one backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledProgram {
    /// Unique program identifier.
    pub program_id: String,
    /// Backend the program was compiled for.
    pub backend_name: String,
    /// Run settings.
    pub config: RunConfig,
    /// Experiments, in submission order.
    pub experiments: Vec<CompiledExperiment>,
}

impl CompiledProgram {
    /// Number of experiments.
    pub fn num_experiments(&self) -> usize {
        self.experiments.len()
    }

    /// Look up an experiment by circuit name.
    pub fn experiment(&self, name: &str) -> Option<&CompiledExperiment> {
        self.experiments.iter().find(|e| e.name == name)
    }
}
