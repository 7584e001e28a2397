//! Test generation for backend crates.

/// Generate one `#[tokio::test]` per conformance check for a backend.
///
/// The calling crate needs `tokio` (with `macros` and `rt`) as a
/// dev-dependency. The factory expression is evaluated once per test, so
/// every check sees a fresh backend.
///
/// ```ignore
/// use arvak_conformance::backend_conformance_tests;
///
/// // Infallible construction.
/// backend_conformance_tests!(simulator, arvak_adapter_sim::SimulatorBackend::new());
///
/// // Construction returning `HalResult<B>`.
/// backend_conformance_tests!(star5, fallible arvak_adapter_fake::FakeBackend::star5());
/// ```
///
/// This expands to a module `simulator` containing `test_configuration`,
/// `test_properties`, `test_status` and `test_run_circuit`.
#[macro_export]
macro_rules! backend_conformance_tests {
    (@suite $module:ident, $build:block) => {
        mod $module {
            #[allow(unused_imports)]
            use super::*;

            fn suite() -> $crate::ConformanceSuite {
                $crate::ConformanceSuite::with_factory(
                    stringify!($module),
                    || -> $crate::__private::HalResult<
                        ::std::boxed::Box<dyn $crate::__private::Backend>,
                    > { $build },
                )
            }

            #[::tokio::test]
            async fn test_configuration() {
                $crate::init_test_logging();
                suite().expect_pass($crate::Check::Configuration).await;
            }

            #[::tokio::test]
            async fn test_properties() {
                $crate::init_test_logging();
                suite().expect_pass($crate::Check::Properties).await;
            }

            #[::tokio::test]
            async fn test_status() {
                $crate::init_test_logging();
                suite().expect_pass($crate::Check::Status).await;
            }

            #[::tokio::test]
            async fn test_run_circuit() {
                $crate::init_test_logging();
                suite().expect_pass($crate::Check::RunCircuit).await;
            }
        }
    };

    ($module:ident, fallible $factory:expr) => {
        $crate::backend_conformance_tests!(@suite $module, {
            $factory.map(|backend| {
                ::std::boxed::Box::new(backend) as ::std::boxed::Box<dyn $crate::__private::Backend>
            })
        });
    };

    ($module:ident, $factory:expr) => {
        $crate::backend_conformance_tests!(@suite $module, {
            ::std::result::Result::Ok(
                ::std::boxed::Box::new($factory) as ::std::boxed::Box<dyn $crate::__private::Backend>
            )
        });
    };
}
