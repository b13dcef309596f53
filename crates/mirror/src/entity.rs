//! Entity metadata trait.

use crate::value::Value;

/// Per-type registration of table/column metadata and field accessors.
///
/// An entity is a struct whose fields map one-to-one onto the columns of an
/// insert statement. The column list and the value list use the same order:
/// the struct's field declaration order, which is stable and deterministic.
///
/// Usually generated with `#[derive(Entity)]`, which defaults the table name
/// to the struct's identifier and each column name to its field identifier,
/// with `#[mirror(table = "...")]` / `#[mirror(column = "...")]` overrides.
/// Implementing by hand works the same way:
///
/// ```ignore
/// impl Entity for Customer {
///     fn table() -> &'static str { "Customer" }
///     fn columns() -> &'static [&'static str] { &["name", "phoneNumber"] }
///     fn values(&self) -> Vec<Value> {
///         vec![Value::from(self.name.clone()), Value::from(self.phone.clone())]
///     }
/// }
/// ```
pub trait Entity {
    /// Table name the insert statement targets.
    fn table() -> &'static str;

    /// Column names in field declaration order.
    fn columns() -> &'static [&'static str];

    /// Current field values, in the same order as [`columns`](Self::columns).
    fn values(&self) -> Vec<Value>;
}
