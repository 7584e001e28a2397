//! The unspecialised template never runs.

use arvak_conformance::{Check, CheckOutcome, ConformanceSuite, SetupError, init_test_logging};

#[test]
fn abstract_template_setup_signals_skip() {
    let suite = ConformanceSuite::abstract_template();
    match suite.setup() {
        Err(SetupError::Skip(reason)) => assert!(reason.contains("abstract")),
        Err(other) => panic!("expected skip, got {other}"),
        Ok(backend) => panic!("abstract template produced backend '{}'", backend.name()),
    }
}

#[tokio::test]
async fn abstract_template_skips_every_check() {
    init_test_logging();
    let report = ConformanceSuite::abstract_template().run_all().await;

    assert_eq!(report.outcomes.len(), Check::ALL.len());
    assert_eq!(report.skipped(), 4);
    assert_eq!(report.passed(), 0);
    assert_eq!(report.failed(), 0);
    assert!(!report.is_conformant());
    for (check, outcome) in &report.outcomes {
        assert!(
            matches!(outcome, CheckOutcome::Skipped(_)),
            "{check} was not skipped"
        );
    }
}

#[tokio::test]
async fn abstract_template_expect_pass_returns_none() {
    let suite = ConformanceSuite::abstract_template();
    for check in Check::ALL {
        assert!(suite.expect_pass(check).await.is_none());
    }
}
