//! Derive macros for mirror
//!
//! Provides the `#[derive(Entity)]` macro and the `#[suite]` attribute macro.

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

mod entity;
mod suite;

/// Derive `Entity` metadata for a struct.
///
/// # Example
///
/// ```ignore
/// use mirror::Entity;
///
/// #[derive(Entity)]
/// #[mirror(table = "Customers")]
/// struct Customer {
///     name: String,
///     #[mirror(column = "phoneNumber")]
///     phone: String,
///     #[mirror(skip)]
///     cached_score: Option<f64>,
/// }
/// ```
///
/// # Generated
///
/// An `Entity` impl: `table()` (attribute override or the struct's
/// identifier), `columns()` (per-field override or the field identifier, in
/// declaration order), and `values()` (each non-skipped field cloned through
/// `Value::from`, same order).
///
/// # Attributes
///
/// - `#[mirror(table = "name")]` - Override the table name
/// - `#[mirror(column = "name")]` - Map a field to a different column name
/// - `#[mirror(skip)]` - Leave a field out of the statement
#[proc_macro_derive(Entity, attributes(mirror))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Generate a `Suite` impl from marked methods of an inherent impl block.
///
/// # Example
///
/// ```ignore
/// use mirror::{suite, Failure, Outcome};
///
/// struct Arithmetic;
///
/// #[suite]
/// impl Arithmetic {
///     #[setup]
///     fn reset(&mut self) -> Outcome { Ok(()) }
///
///     #[case]
///     fn one_plus_one_is_two(&mut self) -> Outcome { Ok(()) }
///
///     #[case(expected = "overflow")]
///     fn add_past_max(&mut self) -> Outcome { Err(Failure::new("overflow")) }
///
///     #[teardown]
///     fn close(&mut self) -> Outcome { Ok(()) }
/// }
/// ```
///
/// # Markers
///
/// - `#[setup]` - Run before each test, in declaration order
/// - `#[case]` - A test operation; `expected = "kind"` declares the failure
///   kind the test must raise to pass
/// - `#[teardown]` - Run after each test, in declaration order
///
/// Marked methods must take `&mut self` and return `Outcome`. Markers are
/// stripped from the emitted impl; unmarked methods are left untouched and
/// unregistered.
#[proc_macro_attribute]
pub fn suite(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[suite] takes no arguments",
        )
        .to_compile_error()
        .into();
    }
    let item = parse_macro_input!(input as ItemImpl);
    suite::expand(item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
