//! INSERT statement generation from entity metadata.

use crate::entity::Entity;
use crate::error::{MirrorError, MirrorResult};
use crate::ident;
use crate::stmt::query::Query;

/// Generate a parametric insert statement for the given entity.
///
/// The table name and column names come from the entity's registered
/// metadata; the parameter values are read from the entity's fields, in the
/// same declaration order as the columns. Pure read of entity state, no side
/// effects.
///
/// Fails if any registered name is not a bare SQL identifier, or if the
/// entity produces a value list whose length disagrees with its column list.
pub fn insert_statement<E: Entity>(entity: &E) -> MirrorResult<Query> {
    let table = E::table();
    ident::check("table", table)?;

    let columns = E::columns();
    for column in columns {
        ident::check("column", column)?;
    }

    let values = entity.values();
    if values.len() != columns.len() {
        return Err(MirrorError::Arity {
            table,
            columns: columns.len(),
            values: values.len(),
        });
    }

    let placeholders = vec!["?"; columns.len()];
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        columns.join(", "),
        placeholders.join(", ")
    );

    tracing::debug!(table, columns = columns.len(), "built insert statement");
    Ok(Query::new(sql, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Customer {
        name: String,
        phone: String,
    }

    impl Entity for Customer {
        fn table() -> &'static str {
            "Customer"
        }

        fn columns() -> &'static [&'static str] {
            &["name", "phoneNumber"]
        }

        fn values(&self) -> Vec<Value> {
            vec![
                Value::from(self.name.clone()),
                Value::from(self.phone.clone()),
            ]
        }
    }

    struct Empty;

    impl Entity for Empty {
        fn table() -> &'static str {
            "Empty"
        }

        fn columns() -> &'static [&'static str] {
            &[]
        }

        fn values(&self) -> Vec<Value> {
            Vec::new()
        }
    }

    struct Broken;

    impl Entity for Broken {
        fn table() -> &'static str {
            "Broken"
        }

        fn columns() -> &'static [&'static str] {
            &["a", "b"]
        }

        fn values(&self) -> Vec<Value> {
            vec![Value::Int(1)]
        }
    }

    fn bob() -> Customer {
        Customer {
            name: "Bob".to_string(),
            phone: "+372 123 4567".to_string(),
        }
    }

    #[test]
    fn builds_statement_in_field_order() {
        let query = insert_statement(&bob()).unwrap();
        assert_eq!(
            query.sql(),
            "INSERT INTO Customer (name, phoneNumber) VALUES (?, ?);"
        );
        assert_eq!(
            query.params(),
            &[
                Value::Text("Bob".to_string()),
                Value::Text("+372 123 4567".to_string()),
            ]
        );
    }

    #[test]
    fn placeholder_count_matches_columns() {
        let query = insert_statement(&bob()).unwrap();
        assert_eq!(query.placeholder_count(), 2);
    }

    #[test]
    fn fieldless_entity_builds_degenerate_statement() {
        let query = insert_statement(&Empty).unwrap();
        assert_eq!(query.sql(), "INSERT INTO Empty () VALUES ();");
        assert!(query.params().is_empty());
    }

    #[test]
    fn column_value_arity_mismatch_is_fatal() {
        let err = insert_statement(&Broken).unwrap_err();
        assert!(matches!(
            err,
            MirrorError::Arity {
                table: "Broken",
                columns: 2,
                values: 1,
            }
        ));
    }

    struct BadColumn;

    impl Entity for BadColumn {
        fn table() -> &'static str {
            "T"
        }

        fn columns() -> &'static [&'static str] {
            &["phone number"]
        }

        fn values(&self) -> Vec<Value> {
            vec![Value::Null]
        }
    }

    #[test]
    fn invalid_column_identifier_is_fatal() {
        let err = insert_statement(&BadColumn).unwrap_err();
        assert!(matches!(err, MirrorError::Identifier { what: "column", .. }));
    }
}
