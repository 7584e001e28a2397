//! Arvak Local Statevector Simulator
//!
//! An in-process backend that executes compiled programs exactly, then
//! samples measurement outcomes. It reports itself as a simulator and
//! carries no calibration data.
//!
//! The [`engine`] module is public so that other in-process backends (the
//! fake hardware devices) can reuse the same execution path under their
//! own configuration.
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 24 | ~256 MB | Slow |
//!
//! # Example
//!
//! ```ignore
//! use arvak_adapter_sim::SimulatorBackend;
//! use arvak_compile::{CompileOptions, compile};
//! use arvak_hal::Backend;
//! use arvak_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let circuit = Circuit::ghz(3)?;
//!     let program = compile(&circuit, &backend, &CompileOptions::default())?;
//!     let result = backend.run(program).await?.result().await?;
//!
//!     // Expect ~50% |000⟩ and ~50% |111⟩
//!     println!("Results: {:?}", result.counts());
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
