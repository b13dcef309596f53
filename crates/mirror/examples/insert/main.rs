//! Example demonstrating insert-statement generation and round-trip parsing.
//!
//! Run with:
//!   cargo run --example insert -p mirror

use mirror::{Entity, MirrorResult, insert_statement, parse};

#[derive(Debug, Entity)]
struct Customer {
    name: String,
    #[mirror(column = "phoneNumber")]
    phone_number: String,
}

fn main() -> MirrorResult<()> {
    let customer = Customer {
        name: "Bob".to_string(),
        phone_number: "+372 123 4567".to_string(),
    };

    let query = insert_statement(&customer)?;
    println!("{}", query.sql());
    for (i, value) in query.params().iter().enumerate() {
        println!("  param {}: {value}", i + 1);
    }

    let parsed = parse(&query)?;
    println!(
        "round-trip: table={} columns={:?}",
        parsed.table, parsed.columns
    );

    Ok(())
}
