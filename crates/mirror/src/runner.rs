//! Per-test execution protocol over a registered suite.

use std::time::{Duration, Instant};

use crate::error::{MirrorError, MirrorResult};
use crate::suite::{Outcome, Suite, TestCase};

/// Result record for one test operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Test name, as registered.
    pub name: &'static str,
    /// Whether the outcome matched the test's expectation.
    pub passed: bool,
    /// Wall-clock time spent in the test body, setup and teardown excluded.
    pub elapsed: Duration,
}

/// Run every registered test of the suite, in discovery order.
///
/// For each test: all setups run first, then the test body is timed and
/// judged against its expected-failure declaration, then all teardowns run
/// regardless of the test's outcome. Every test runs even if earlier ones
/// failed; a failed setup or teardown aborts the whole run with a fatal
/// error instead of a result record.
pub fn run<S: Suite>(suite: &mut S) -> MirrorResult<Vec<TestResult>> {
    let setups = S::setups();
    let tests = S::tests();
    let teardowns = S::teardowns();

    let mut results = Vec::with_capacity(tests.len());
    for test in &tests {
        for hook in &setups {
            if let Err(failure) = (hook.run)(suite) {
                return Err(MirrorError::Setup {
                    name: hook.name,
                    failure,
                });
            }
        }

        tracing::debug!(test = test.name, "running test");
        let start = Instant::now();
        let outcome = (test.run)(suite);
        let elapsed = start.elapsed();
        let passed = judge(test, &outcome);
        if !passed {
            tracing::warn!(test = test.name, ?outcome, "test failed");
        }

        for hook in &teardowns {
            if let Err(failure) = (hook.run)(suite) {
                return Err(MirrorError::Teardown {
                    name: hook.name,
                    failure,
                });
            }
        }

        results.push(TestResult {
            name: test.name,
            passed,
            elapsed,
        });
    }

    Ok(results)
}

/// Judge a test outcome against its expected-failure declaration.
fn judge<S>(test: &TestCase<S>, outcome: &Outcome) -> bool {
    match (outcome, test.expected_failure) {
        (Ok(()), None) => true,
        // Expected a failure that did not occur.
        (Ok(()), Some(_)) => false,
        (Err(_), None) => false,
        (Err(failure), Some(expected)) => failure.kind() == expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{Failure, Hook};

    /// Hand-written suite; the derive-free path the macro expands to.
    #[derive(Default)]
    struct Counting {
        setups: usize,
        teardowns: usize,
        fail_setup: bool,
        fail_teardown: bool,
    }

    impl Counting {
        fn reset(&mut self) -> Outcome {
            self.setups += 1;
            if self.fail_setup {
                return Err(Failure::new("fixture"));
            }
            Ok(())
        }

        fn close(&mut self) -> Outcome {
            self.teardowns += 1;
            if self.fail_teardown {
                return Err(Failure::new("fixture"));
            }
            Ok(())
        }

        fn passes(&mut self) -> Outcome {
            Ok(())
        }

        fn fails(&mut self) -> Outcome {
            Err(Failure::with_detail("assertion", "1 + 1 != 3"))
        }

        fn overflows(&mut self) -> Outcome {
            Err(Failure::new("overflow"))
        }
    }

    impl Suite for Counting {
        fn setups() -> Vec<Hook<Self>> {
            vec![Hook {
                name: "reset",
                run: Self::reset,
            }]
        }

        fn tests() -> Vec<TestCase<Self>> {
            vec![
                TestCase {
                    name: "passes",
                    expected_failure: None,
                    run: Self::passes,
                },
                TestCase {
                    name: "fails",
                    expected_failure: None,
                    run: Self::fails,
                },
                TestCase {
                    name: "overflows",
                    expected_failure: Some("overflow"),
                    run: Self::overflows,
                },
                TestCase {
                    name: "expected_failure_missing",
                    expected_failure: Some("overflow"),
                    run: Self::passes,
                },
                TestCase {
                    name: "wrong_failure_kind",
                    expected_failure: Some("io"),
                    run: Self::overflows,
                },
            ]
        }

        fn teardowns() -> Vec<Hook<Self>> {
            vec![Hook {
                name: "close",
                run: Self::close,
            }]
        }
    }

    #[test]
    fn judges_every_expectation_combination() {
        let mut suite = Counting::default();
        let results = run(&mut suite).unwrap();
        let verdicts: Vec<(&str, bool)> = results.iter().map(|r| (r.name, r.passed)).collect();
        assert_eq!(
            verdicts,
            vec![
                ("passes", true),
                ("fails", false),
                ("overflows", true),
                ("expected_failure_missing", false),
                ("wrong_failure_kind", false),
            ]
        );
    }

    #[test]
    fn hooks_run_once_per_test() {
        let mut suite = Counting::default();
        let results = run(&mut suite).unwrap();
        assert_eq!(suite.setups, results.len());
        assert_eq!(suite.teardowns, results.len());
    }

    #[test]
    fn setup_failure_aborts_with_no_results() {
        let mut suite = Counting {
            fail_setup: true,
            ..Counting::default()
        };
        let err = run(&mut suite).unwrap_err();
        assert!(matches!(err, MirrorError::Setup { name: "reset", .. }));
        // First setup aborted everything; no test body ever ran.
        assert_eq!(suite.setups, 1);
        assert_eq!(suite.teardowns, 0);
    }

    #[test]
    fn teardown_failure_aborts_after_first_test() {
        let mut suite = Counting {
            fail_teardown: true,
            ..Counting::default()
        };
        let err = run(&mut suite).unwrap_err();
        assert!(matches!(err, MirrorError::Teardown { name: "close", .. }));
        assert_eq!(suite.setups, 1);
        assert_eq!(suite.teardowns, 1);
    }
}
