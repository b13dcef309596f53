//! Suite registration: tagged operations and failure values.
//!
//! A suite registers its operations as descriptor lists in declaration
//! order, one list per category (setup, test, teardown). Operations signal
//! failure by returning a [`Failure`] value rather than unwinding; a test
//! may declare the failure kind it expects to see.

use std::fmt;

/// What a suite operation returns: `Ok(())` or an explicit failure.
pub type Outcome = Result<(), Failure>;

/// An explicit operation failure: a kind identifier plus optional detail.
///
/// The kind is what expected-failure matching compares against, by plain
/// string equality. The detail is for humans and never participates in
/// matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: String,
    detail: Option<String>,
}

impl Failure {
    /// Create a failure of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            detail: None,
        }
    }

    /// Create a failure with a human-readable detail message.
    pub fn with_detail(kind: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            detail: Some(detail.into()),
        }
    }

    /// The failure kind identifier.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The optional detail message.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({detail})", self.kind),
            None => f.write_str(&self.kind),
        }
    }
}

/// A registered setup or teardown operation.
pub struct Hook<S> {
    /// Operation name, normally the method identifier.
    pub name: &'static str,
    /// Invocation function.
    pub run: fn(&mut S) -> Outcome,
}

/// A registered test operation.
pub struct TestCase<S> {
    /// Test name, normally the method identifier.
    pub name: &'static str,
    /// Failure kind this test is expected to raise, if any.
    pub expected_failure: Option<&'static str>,
    /// Invocation function.
    pub run: fn(&mut S) -> Outcome,
}

/// Per-type registration of a suite's tagged operations.
///
/// Usually generated with the `#[suite]` attribute macro from `#[setup]`,
/// `#[case]`, and `#[teardown]` method markers; a hand-written impl returns
/// the same descriptor lists:
///
/// ```ignore
/// impl Suite for Arithmetic {
///     fn setups() -> Vec<Hook<Self>> {
///         vec![Hook { name: "reset", run: Self::reset }]
///     }
///     fn tests() -> Vec<TestCase<Self>> {
///         vec![TestCase {
///             name: "one_plus_one_is_two",
///             expected_failure: None,
///             run: Self::one_plus_one_is_two,
///         }]
///     }
///     fn teardowns() -> Vec<Hook<Self>> {
///         Vec::new()
///     }
/// }
/// ```
///
/// Discovery order is the order of the returned lists; the runner never
/// reorders them.
pub trait Suite: Sized {
    /// Setup operations, run before each test in order.
    fn setups() -> Vec<Hook<Self>>;

    /// Test operations, run in order.
    fn tests() -> Vec<TestCase<Self>>;

    /// Teardown operations, run after each test in order.
    fn teardowns() -> Vec<Hook<Self>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_with_and_without_detail() {
        assert_eq!(Failure::new("overflow").to_string(), "overflow");
        assert_eq!(
            Failure::with_detail("overflow", "7 + max").to_string(),
            "overflow (7 + max)"
        );
    }

    #[test]
    fn failure_kind_matches_by_equality() {
        let failure = Failure::with_detail("io", "disk full");
        assert_eq!(failure.kind(), "io");
        assert_ne!(failure.kind(), "timeout");
    }
}
