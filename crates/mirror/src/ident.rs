//! Bare SQL identifier validation.
//!
//! Generated statements are tokenized on whitespace and `,();`, so table and
//! column names must be single bare tokens. Names are validated against
//! `[A-Za-z_][A-Za-z0-9_$]*` when a statement is built; a name that fails
//! here is broken registration metadata, reported to the caller instead of
//! silently emitting an unparseable statement.

use crate::error::{MirrorError, MirrorResult};

/// Validate a registered table or column name.
///
/// `what` names the role of the identifier ("table" or "column") and is
/// echoed in the error.
pub(crate) fn check(what: &'static str, name: &str) -> MirrorResult<()> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err(invalid(what, name, "identifier cannot be empty"));
    };
    if first != '_' && !first.is_ascii_alphabetic() {
        return Err(invalid(
            what,
            name,
            format!("invalid start character '{first}'"),
        ));
    }

    for c in chars {
        if c != '_' && c != '$' && !c.is_ascii_alphanumeric() {
            return Err(invalid(what, name, format!("invalid character '{c}'")));
        }
    }

    Ok(())
}

fn invalid(what: &'static str, name: &str, reason: impl Into<String>) -> MirrorError {
    MirrorError::Identifier {
        what,
        name: name.to_string(),
        reason: reason.into(),
    }
}
