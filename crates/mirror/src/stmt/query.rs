//! Parametric query type.

use crate::value::Value;

/// A parametric SQL statement together with its bound parameter values.
///
/// Immutable once created. Invariant: the parameter list has one entry per
/// `?` placeholder in the query string, in placeholder order. Statements
/// built with [`insert_statement`](crate::stmt::insert_statement) uphold
/// this by construction; literal queries assembled for parser tests are
/// checked structurally by [`parse`](crate::stmt::parse).
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    sql: String,
    params: Vec<Value>,
}

impl Query {
    /// Create a query from a literal statement string and its parameters.
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// The statement text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound parameter values, in placeholder order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Number of `?` placeholders in the statement text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_count_counts_question_marks() {
        let q = Query::new(
            "INSERT INTO t (a, b) VALUES (?, ?);",
            vec![Value::Int(1), Value::Int(2)],
        );
        assert_eq!(q.placeholder_count(), 2);
        assert_eq!(q.params().len(), 2);
    }
}
