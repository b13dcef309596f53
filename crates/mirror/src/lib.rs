//! # mirror
//!
//! Compile-time stand-ins for two classic runtime-reflection exercises:
//! insert-statement generation from per-type metadata, and an
//! annotation-driven test runner.
//!
//! ## Features
//!
//! - **Statement building**: `Entity` metadata (table, columns, field
//!   accessors) drives `INSERT INTO ... VALUES (?, ...)` generation with an
//!   ordered parameter list
//! - **Round-trip parsing**: re-derive table/column structure from a
//!   statement string, with shape, cardinality, and token-level validation
//! - **Suite running**: setup/test/teardown operations registered per type,
//!   executed in a fixed per-test protocol with expected-failure matching
//! - **Derive macros**: `#[derive(Entity)]` and `#[suite]` generate the
//!   registration boilerplate from attributes
//!
//! ## Usage
//!
//! ```ignore
//! use mirror::{insert_statement, suite, Entity, Failure, Outcome};
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
//! struct Arithmetic;
//!
//! #[suite]
//! impl Arithmetic {
//!     #[case]
//!     fn one_plus_one_is_two(&mut self) -> Outcome {
//!         if 1 + 1 == 2 { Ok(()) } else { Err(Failure::new("assertion")) }
//!     }
//! }
//!
//! let results = mirror::run(&mut Arithmetic)?;
//! ```

pub mod entity;
pub mod error;
mod ident;
pub mod runner;
pub mod stmt;
pub mod suite;
pub mod value;

pub use entity::Entity;
pub use error::{MirrorError, MirrorResult};
pub use runner::{TestResult, run};
pub use stmt::{ParsedStatement, Query, insert_statement, parse};
pub use suite::{Failure, Hook, Outcome, Suite, TestCase};
pub use value::Value;

#[cfg(feature = "derive")]
pub use mirror_derive::{Entity, suite};
