//! Entry points that turn circuits into backend-ready programs.

use tracing::{debug, info, instrument};

use arvak_hal::{Backend, BackendConfiguration, CompiledExperiment, CompiledProgram, RunConfig};
use arvak_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::manager::PassManager;

/// Run settings requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Shots per experiment.
    pub shots: u32,
    /// Sampling seed passed through to the backend.
    pub seed: Option<u64>,
    /// Request per-shot memory.
    pub memory: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            shots: 1024,
            seed: None,
            memory: false,
        }
    }
}

impl CompileOptions {
    /// Options with the given shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Options with a fixed sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Compile one circuit for `backend`.
pub fn compile(
    circuit: &Circuit,
    backend: &dyn Backend,
    options: &CompileOptions,
) -> CompileResult<CompiledProgram> {
    compile_batch(std::slice::from_ref(circuit), backend, options)
}

/// Compile several circuits into a single program for `backend`.
#[instrument(skip_all, fields(backend = backend.name(), circuits = circuits.len()))]
pub fn compile_batch(
    circuits: &[Circuit],
    backend: &dyn Backend,
    options: &CompileOptions,
) -> CompileResult<CompiledProgram> {
    let target = backend.configuration()?;
    let program = compile_for_target(circuits, &target, options)?;
    info!(
        program_id = %program.program_id,
        experiments = program.num_experiments(),
        "Compiled program"
    );
    Ok(program)
}

/// Compile against a configuration directly, without a live backend.
pub fn compile_for_target(
    circuits: &[Circuit],
    target: &BackendConfiguration,
    options: &CompileOptions,
) -> CompileResult<CompiledProgram> {
    if circuits.is_empty() {
        return Err(CompileError::EmptyBatch);
    }
    if options.shots == 0 || options.shots > target.max_shots {
        return Err(CompileError::InvalidShots {
            shots: options.shots,
            max: target.max_shots,
        });
    }

    let pm = PassManager::for_target();
    let mut experiments = Vec::with_capacity(circuits.len());
    for circuit in circuits {
        let mut lowered = circuit.clone();
        pm.run(&mut lowered, target)?;
        debug!(
            circuit = circuit.name(),
            ops_before = circuit.num_ops(),
            ops_after = lowered.num_ops(),
            "Lowered circuit"
        );
        experiments.push(CompiledExperiment {
            name: lowered.name().to_string(),
            num_qubits: lowered.num_qubits() as u32,
            num_clbits: lowered.num_clbits() as u32,
            instructions: lowered.instructions().to_vec(),
        });
    }

    let n_qubits = experiments.iter().map(|e| e.num_qubits).max().unwrap_or(0);
    let memory_slots = experiments.iter().map(|e| e.num_clbits).max().unwrap_or(0);

    Ok(CompiledProgram {
        program_id: uuid::Uuid::new_v4().to_string(),
        backend_name: target.backend_name.clone(),
        config: RunConfig {
            shots: options.shots,
            seed: options.seed,
            memory: options.memory && target.memory,
            n_qubits,
            memory_slots,
        },
        experiments,
    })
}
