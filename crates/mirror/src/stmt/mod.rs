//! Insert statement generation and round-trip parsing.
//!
//! [`insert_statement`] turns an [`Entity`](crate::Entity) into a [`Query`]:
//! one column and one `?` placeholder per field, parameters in the same
//! order. [`parse`] re-derives the table/column structure from the query
//! string as a structural round-trip check.
//!
//! ```ignore
//! use mirror::{insert_statement, parse, Entity};
//!
//! #[derive(Entity)]
//! struct Customer {
//!     name: String,
//!     #[mirror(column = "phoneNumber")]
//!     phone: String,
//! }
//!
//! let query = insert_statement(&customer)?;
//! assert_eq!(
//!     query.sql(),
//!     "INSERT INTO Customer (name, phoneNumber) VALUES (?, ?);"
//! );
//!
//! let parsed = parse(&query)?;
//! assert_eq!(parsed.table, "Customer");
//! ```

mod builder;
mod parser;
mod query;

pub use builder::insert_statement;
pub use parser::{ParsedStatement, parse};
pub use query::Query;
