//! Pass trait and types for compilation passes.

use arvak_hal::BackendConfiguration;
use arvak_ir::Circuit;

use crate::error::CompileResult;

/// The kind of compilation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Checks the circuit against the target without modifying it.
    Analysis,
    /// Rewrites the circuit.
    Transformation,
}

/// A compilation step applied to a circuit for a given target.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Get the kind of this pass.
    fn kind(&self) -> PassKind;

    /// Run the pass.
    ///
    /// Analysis passes MUST leave `circuit` unchanged.
    fn run(&self, circuit: &mut Circuit, target: &BackendConfiguration) -> CompileResult<()>;

    /// Check if this pass should run for the given target.
    fn should_run(&self, _circuit: &Circuit, _target: &BackendConfiguration) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPass;

    impl Pass for TestPass {
        fn name(&self) -> &'static str {
            "test"
        }

        fn kind(&self) -> PassKind {
            PassKind::Analysis
        }

        fn run(&self, _circuit: &mut Circuit, _target: &BackendConfiguration) -> CompileResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_pass_defaults() {
        let pass = TestPass;
        let target = BackendConfiguration::simulator("sim", 2);
        assert_eq!(pass.kind(), PassKind::Analysis);
        assert_eq!(pass.name(), "test");
        assert!(pass.should_run(&Circuit::new("c"), &target));
    }
}
