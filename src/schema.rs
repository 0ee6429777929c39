//! Schema adapter and built-in rules.

pub use courier_schema::*;
