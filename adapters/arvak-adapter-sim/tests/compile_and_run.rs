//! End-to-end: compile a circuit for the simulator and execute it.

use arvak_adapter_sim::SimulatorBackend;
use arvak_compile::{CompileOptions, compile, compile_batch};
use arvak_hal::Backend;
use arvak_ir::{Circuit, ClbitId, QubitId};

fn bell() -> Circuit {
    let mut circuit = Circuit::with_size("bell", 2, 2);
    circuit.h(QubitId(0)).unwrap();
    circuit.cx(QubitId(0), QubitId(1)).unwrap();
    circuit.measure(QubitId(0), ClbitId(0)).unwrap();
    circuit.measure(QubitId(1), ClbitId(1)).unwrap();
    circuit
}

#[tokio::test]
async fn bell_runs_successfully() {
    let backend = SimulatorBackend::new();
    let program = compile(&bell(), &backend, &CompileOptions::default()).unwrap();

    let job = backend.run(program).await.unwrap();
    let result = job.result().await.unwrap();

    assert!(result.success);
    assert_eq!(result.backend_name, "simulator");
    let counts = result.get_counts("bell").unwrap();
    assert_eq!(counts.total_shots(), 1024);
    assert_eq!(counts.get("01") + counts.get("10"), 0);
}

#[tokio::test]
async fn batch_results_keep_order() {
    let backend = SimulatorBackend::new();
    let mut flip = Circuit::with_size("flip", 1, 1);
    flip.x(QubitId(0)).unwrap();
    flip.measure(QubitId(0), ClbitId(0)).unwrap();

    let options = CompileOptions::default().with_shots(64).with_seed(99);
    let program = compile_batch(&[bell(), flip], &backend, &options).unwrap();
    let result = backend.run(program).await.unwrap().result().await.unwrap();

    assert_eq!(result.results.len(), 2);
    assert_eq!(result.results[0].name, "bell");
    assert_eq!(result.results[1].name, "flip");
    assert_eq!(result.get_counts("flip").unwrap().get("1"), 64);
}
