//! Single-value validators used by the built-in schema rules.

pub use courier_validators::*;
