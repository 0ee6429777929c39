//! Schema adapter for Courier
//!
//! Any value implementing [`StandardSchema`] can be wrapped with [`schema`]
//! into a [`DataValidator`]. The validator never fails: it returns a
//! [`ValidationResult`] that is either
//!
//! ```json
//! { "success": true, "data": { ... } }
//! ```
//!
//! or
//!
//! ```json
//! {
//!   "success": false,
//!   "status": 400,
//!   "error": { "formErrors": [], "fieldErrors": { "persons[].name": ["Required"] } }
//! }
//! ```
//!
//! Field keys join property names with `.` and collapse array indices into
//! `[]`, see [`field_key`]. The [`rules`] module provides a built-in rule set
//! for schemas written in Rust.
//!
//! ## Example
//!
//! ```
//! use courier_core::RequestEvent;
//! use courier_schema::rules::{array, object, string};
//! use courier_schema::{DataValidator, schema};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let contacts = schema(object().field("emails", array(string().email()).min(1)));
//!
//! let result = contacts
//!     .validate(&RequestEvent::synthetic(), json!({"emails": ["ada@example.com", "nope"]}))
//!     .await;
//!
//! let error = result.error().unwrap();
//! assert_eq!(error.field("emails[]"), ["Invalid email"]);
//! # }
//! ```

pub mod flatten;
pub mod issue;
pub mod result;
pub mod rules;
pub mod standard;
pub mod validator;

pub use flatten::{field_key, flatten_issues};
pub use issue::{Issue, PathSegment};
pub use result::{ValidationResult, ValidatorErrors};
pub use standard::{MaybeAsync, Outcome, StandardSchema};
pub use validator::{DataValidator, SchemaValidator, ValidatorFn, schema, validator_fn};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::flatten::*;
	pub use crate::issue::*;
	pub use crate::result::*;
	pub use crate::rules::{Rule, RuleExt};
	pub use crate::standard::*;
	pub use crate::validator::*;
}
