//! Error types for mirror

use thiserror::Error;

use crate::suite::Failure;

/// Result type alias for mirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Fatal error conditions.
///
/// Test failures are deliberately absent: a failing test operation is a
/// [`Failure`] value folded into its result record by the runner, never an
/// error that propagates out of [`run`](crate::runner::run).
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Query string does not have the insert statement shape
    #[error("query doesn't match pattern 'INSERT INTO ... (...) VALUES (...);'")]
    Shape,

    /// Column list and placeholder list differ in length
    #[error("column count != placeholder count; columns={columns:?}, placeholders={placeholders:?}")]
    CountMismatch {
        columns: Vec<String>,
        placeholders: Vec<String>,
    },

    /// Strict parse met a mismatched token, or ran out of tokens
    #[error("expected {expected} but found {}", .found.as_deref().unwrap_or("nothing"))]
    Token {
        expected: String,
        found: Option<String>,
    },

    /// Registered table or column metadata is not a bare SQL identifier
    #[error("invalid {what} identifier {name:?}: {reason}")]
    Identifier {
        what: &'static str,
        name: String,
        reason: String,
    },

    /// An entity's registered columns and produced values disagree in length
    #[error("entity '{table}' produced {values} values for {columns} columns")]
    Arity {
        table: &'static str,
        columns: usize,
        values: usize,
    },

    /// A setup operation failed; the run is aborted
    #[error("setup '{name}' failed: {failure}")]
    Setup {
        name: &'static str,
        failure: Failure,
    },

    /// A teardown operation failed; the run is aborted
    #[error("teardown '{name}' failed: {failure}")]
    Teardown {
        name: &'static str,
        failure: Failure,
    },
}

impl MirrorError {
    /// Create a token error for a literal token that was not found.
    pub(crate) fn unexpected_token(expected: &str, found: Option<&str>) -> Self {
        Self::Token {
            expected: format!("'{expected}'"),
            found: found.map(|t| format!("'{t}'")),
        }
    }

    /// Create a token error for a described (non-literal) token that is missing.
    pub(crate) fn missing_token(description: &str) -> Self {
        Self::Token {
            expected: description.to_string(),
            found: None,
        }
    }

    /// Check if this is a count mismatch error
    pub fn is_count_mismatch(&self) -> bool {
        matches!(self, Self::CountMismatch { .. })
    }

    /// Check if this is a fixture (setup or teardown) error
    pub fn is_fixture(&self) -> bool {
        matches!(self, Self::Setup { .. } | Self::Teardown { .. })
    }
}
