//! Program execution shared by every in-process backend.
//!
//! [`execute`] validates a [`CompiledProgram`] against a
//! [`BackendConfiguration`] and runs each experiment on a fresh
//! [`Statevector`]. Circuits whose measurements are all terminal are
//! evolved once and sampled `shots` times; anything with mid-circuit
//! measurement or reset is re-simulated per shot.

use std::time::Instant;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};
use uuid::Uuid;

use arvak_hal::{
    BackendConfiguration, CompiledExperiment, CompiledProgram, Counts, ExecutionResult,
    ExperimentResult, HalError, HalResult,
};
use arvak_ir::{Instruction, InstructionKind};

use crate::statevector::Statevector;

/// Largest register the engine will allocate, regardless of configuration.
pub const MAX_SIM_QUBITS: u32 = 24;

/// Check that `program` can run on `target`.
pub fn validate(program: &CompiledProgram, target: &BackendConfiguration) -> HalResult<()> {
    if program.experiments.is_empty() {
        return Err(HalError::InvalidProgram("program has no experiments".into()));
    }
    let shots = program.config.shots;
    if shots == 0 || shots > target.max_shots {
        return Err(HalError::InvalidShots(format!(
            "{shots} requested, backend accepts 1..={}",
            target.max_shots
        )));
    }

    for experiment in &program.experiments {
        if experiment.num_qubits > target.n_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "experiment '{}' has {} qubits but {} only supports {}",
                experiment.name, experiment.num_qubits, target.backend_name, target.n_qubits
            )));
        }
        if experiment.num_qubits > MAX_SIM_QUBITS {
            return Err(HalError::CircuitTooLarge(format!(
                "experiment '{}' has {} qubits, the engine simulates at most {MAX_SIM_QUBITS}",
                experiment.name, experiment.num_qubits
            )));
        }
        for inst in &experiment.instructions {
            validate_instruction(experiment, inst, target)?;
        }
    }
    Ok(())
}

fn validate_instruction(
    experiment: &CompiledExperiment,
    inst: &Instruction,
    target: &BackendConfiguration,
) -> HalResult<()> {
    let invalid = |msg: String| HalError::InvalidProgram(format!("{}: {msg}", experiment.name));

    if let Some(q) = inst.qubits.iter().find(|q| q.0 >= experiment.num_qubits) {
        return Err(invalid(format!("{} references {q}", inst.name())));
    }
    if let Some(c) = inst.clbits.iter().find(|c| c.0 >= experiment.num_clbits) {
        return Err(invalid(format!("{} references {c}", inst.name())));
    }

    let gate = match &inst.kind {
        InstructionKind::Gate(gate) => gate,
        InstructionKind::Measure if inst.qubits.len() != 1 || inst.clbits.len() != 1 => {
            return Err(invalid("measure needs one qubit and one clbit".into()));
        }
        InstructionKind::Reset if inst.qubits.len() != 1 => {
            return Err(invalid("reset needs one qubit".into()));
        }
        _ => return Ok(()),
    };

    if inst.qubits.len() != gate.num_qubits() as usize {
        return Err(invalid(format!(
            "gate '{}' takes {} qubits, got {}",
            gate.name(),
            gate.num_qubits(),
            inst.qubits.len()
        )));
    }
    if let Some((i, q)) = inst
        .qubits
        .iter()
        .enumerate()
        .find(|&(i, q)| inst.qubits[..i].contains(q))
    {
        return Err(invalid(format!(
            "gate '{}' repeats {q} at operand {i}",
            gate.name()
        )));
    }
    if !target.supports_gate(gate.name()) {
        return Err(invalid(format!("gate '{}' is not native", gate.name())));
    }
    if let [a, b] = inst.qubits.as_slice() {
        let (a, b) = (a.0, b.0);
        if !target.is_connected(a, b) {
            return Err(invalid(format!(
                "gate '{}' on ({a}, {b}) is not on a coupling edge",
                gate.name()
            )));
        }
    }
    Ok(())
}

/// Validate and run `program` on the local engine, reporting as `target`.
#[instrument(skip_all, fields(backend = %target.backend_name, program = %program.program_id))]
pub fn execute(program: &CompiledProgram, target: &BackendConfiguration) -> HalResult<ExecutionResult> {
    validate(program, target)?;

    let start = Instant::now();
    let mut rng = match program.config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let results = program
        .experiments
        .iter()
        .map(|experiment| {
            let counts = run_experiment(experiment, program.config.shots, &mut rng);
            ExperimentResult {
                name: experiment.name.clone(),
                shots: program.config.shots,
                success: true,
                counts,
                status: "DONE".into(),
            }
        })
        .collect();

    let elapsed = start.elapsed();
    debug!("Simulation completed in {:?}", elapsed);

    Ok(ExecutionResult {
        backend_name: target.backend_name.clone(),
        backend_version: target.backend_version.clone(),
        job_id: Uuid::new_v4().to_string(),
        success: true,
        results,
        date: Utc::now(),
        time_taken_ms: Some(elapsed.as_millis() as u64),
    })
}

/// Run one experiment for `shots` shots.
pub fn run_experiment(experiment: &CompiledExperiment, shots: u32, rng: &mut StdRng) -> Counts {
    let num_qubits = experiment.num_qubits as usize;
    let num_clbits = experiment.num_clbits as usize;
    debug!(
        experiment = %experiment.name,
        "Starting simulation: {} qubits, {} shots",
        num_qubits, shots
    );

    let mut counts = Counts::new();
    if num_clbits == 0 {
        return counts;
    }

    let first_measure = experiment
        .instructions
        .iter()
        .position(Instruction::is_measure)
        .unwrap_or(experiment.instructions.len());
    let (body, tail) = experiment.instructions.split_at(first_measure);
    let terminal = tail
        .iter()
        .all(|i| matches!(i.kind, InstructionKind::Measure | InstructionKind::Barrier));

    if terminal && !body.iter().any(|i| i.kind == InstructionKind::Reset) {
        let mut sv = Statevector::new(num_qubits);
        for inst in body {
            if let InstructionKind::Gate(gate) = &inst.kind {
                sv.apply_gate(gate, &qubit_indices(inst));
            }
        }
        let mapping: Vec<(usize, usize)> = tail
            .iter()
            .filter(|i| i.is_measure())
            .map(|i| (i.qubits[0].0 as usize, i.clbits[0].0 as usize))
            .collect();

        for _ in 0..shots {
            let outcome = sv.sample(rng);
            let mut register = vec![false; num_clbits];
            for &(q, c) in &mapping {
                register[c] = outcome & (1 << q) != 0;
            }
            counts.insert(bitstring(&register), 1);
        }
    } else {
        debug!("Mid-circuit measurement, simulating per shot");
        for _ in 0..shots {
            let mut sv = Statevector::new(num_qubits);
            let mut register = vec![false; num_clbits];
            for inst in &experiment.instructions {
                match &inst.kind {
                    InstructionKind::Gate(gate) => sv.apply_gate(gate, &qubit_indices(inst)),
                    InstructionKind::Measure => {
                        let q = inst.qubits[0].0 as usize;
                        register[inst.clbits[0].0 as usize] = sv.measure(q, rng);
                    }
                    InstructionKind::Reset => sv.reset(inst.qubits[0].0 as usize, rng),
                    InstructionKind::Barrier => {}
                }
            }
            counts.insert(bitstring(&register), 1);
        }
    }

    counts
}

fn qubit_indices(inst: &Instruction) -> Vec<usize> {
    inst.qubits.iter().map(|q| q.0 as usize).collect()
}

/// Render a classical register with clbit 0 as the rightmost character.
fn bitstring(register: &[bool]) -> String {
    register
        .iter()
        .rev()
        .map(|&b| if b { '1' } else { '0' })
        .collect()
}
