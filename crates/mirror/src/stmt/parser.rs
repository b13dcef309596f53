//! Structural round-trip parsing of insert statements.
//!
//! Two passes over the statement text, kept as distinct observable failures:
//! an anchored shape check (with column/placeholder cardinality compared on
//! the captured lists), then a strict token-by-token parse. Parameter values
//! are carried through from the [`Query`] unchanged; literal values are never
//! embedded in the statement text.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MirrorError, MirrorResult};
use crate::stmt::query::Query;
use crate::value::Value;

/// Table/column/parameter structure re-derived from a [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    /// Table name the statement inserts into.
    pub table: String,
    /// Column names, in statement order.
    pub columns: Vec<String>,
    /// Parameter values carried through from the query.
    pub parameters: Vec<Value>,
}

/// Parse an insert statement back into its structure.
///
/// Validates the statement shape and token sequence
/// (`INSERT INTO <table> (<columns>) VALUES (<placeholders>);`,
/// case-insensitive, arbitrary whitespace around tokens) and returns the
/// table name, column names, and the query's parameter values.
pub fn parse(query: &Query) -> MirrorResult<ParsedStatement> {
    validate_shape(query.sql())?;

    let mut tok = tokens(query.sql());
    expect(&mut tok, "INSERT")?;
    expect(&mut tok, "INTO")?;
    let table = find(&mut tok, "table name")?;

    let mut columns = Vec::new();
    loop {
        let token = find(&mut tok, "column name or VALUES")?;
        if token.eq_ignore_ascii_case("VALUES") {
            break;
        }
        columns.push(token.to_string());
    }
    for _ in &columns {
        expect(&mut tok, "?")?;
    }

    tracing::debug!(table, columns = columns.len(), "parsed insert statement");
    Ok(ParsedStatement {
        table: table.to_string(),
        columns,
        parameters: query.params().to_vec(),
    })
}

/// Anchored shape pre-check, plus column/placeholder cardinality.
fn validate_shape(sql: &str) -> MirrorResult<()> {
    static SHAPE_RE: OnceLock<Regex> = OnceLock::new();
    let re = SHAPE_RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*INSERT\s+INTO\s+(\S+)\s*\(([^)]*)\)\s*VALUES\s*\(([^)]*)\)\s*;\s*$")
            .expect("invalid built-in insert regex")
    });

    let captures = re.captures(sql).ok_or(MirrorError::Shape)?;

    let columns = items(&captures[2]);
    let placeholders = items(&captures[3]);
    if columns.len() != placeholders.len() {
        return Err(MirrorError::CountMismatch {
            columns,
            placeholders,
        });
    }

    Ok(())
}

/// Split a captured parenthesized list into trimmed items.
fn items(list: &str) -> Vec<String> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(|item| item.trim().to_string()).collect()
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')' | ';')
}

fn tokens(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(is_delimiter).filter(|t| !t.is_empty())
}

/// Consume the next token and require it to equal `expected` (case-insensitive).
fn expect<'a>(tok: &mut impl Iterator<Item = &'a str>, expected: &str) -> MirrorResult<()> {
    match tok.next() {
        Some(next) if next.eq_ignore_ascii_case(expected) => Ok(()),
        Some(next) => Err(MirrorError::unexpected_token(expected, Some(next))),
        None => Err(MirrorError::unexpected_token(expected, None)),
    }
}

/// Consume the next token, whatever it is; `description` names it in the error.
fn find<'a>(tok: &mut impl Iterator<Item = &'a str>, description: &str) -> MirrorResult<&'a str> {
    tok.next()
        .ok_or_else(|| MirrorError::missing_token(description))
}
