//! # Courier
//!
//! Server functions and schema validation for Rust web applications.
//!
//! Courier provides two small adapters that sit between a transport layer
//! and application code:
//!
//! - **Server functions** ([`ServerFn`]): wrap an async handler whose first
//!   parameter is the current [`RequestEvent`]. Callers invoke the proxy with
//!   the remaining arguments, optionally preceded by an [`AbortSignal`], and
//!   never pass the request themselves.
//! - **Schema validation** ([`schema`]): wrap any [`StandardSchema`] so its
//!   outcome comes back as `{success, data}` or
//!   `{success: false, status: 400, error: {formErrors, fieldErrors}}`.
//!
//! ## Feature Flags
//!
//! - `minimal` - Server functions only
//! - `full` (default) - Server functions and schema validation
//! - `server-fn` - [`ServerFn`], [`Handler`] and [`ServerFnError`]
//! - `schema` - [`schema`], the built-in [`rules`](schema::rules) and validators
//!
//! ## Quick Example
//!
//! ```
//! use courier::prelude::*;
//! use courier::schema::rules::{object, string};
//! use serde_json::json;
//!
//! async fn greet(event: RequestEvent, name: String) -> Result<String, ServerFnError> {
//!     Ok(format!("hello {} from {}", name, event.path()))
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let greet = ServerFn::new(greet);
//! assert_eq!(greet.call(("Ada".to_string(),)).await, Ok("hello Ada from /".to_string()));
//!
//! let login = schema(object().field("username", string().min(4)));
//! let result = login.validate(&RequestEvent::synthetic(), json!({"username": "ada"})).await;
//! assert_eq!(
//!     result.error().unwrap().field("username"),
//!     ["String must contain at least 4 character(s)"]
//! );
//! # }
//! ```

pub mod core;
#[cfg(feature = "schema")]
pub mod schema;
#[cfg(feature = "server-fn")]
pub mod server_fn;
#[cfg(feature = "schema")]
pub mod validators;

pub use courier_core::{
	AbortSignal, Aborted, AmbientContext, ContextFactory, FixedContext, RequestEvent, Settings,
	SettingsError, init_logging, scope_request_event,
};

#[cfg(feature = "server-fn")]
pub use courier_server_fn::{Handler, ServerFn, ServerFnError};

#[cfg(feature = "schema")]
pub use courier_schema::{
	DataValidator, Issue, MaybeAsync, Outcome, PathSegment, SchemaValidator, StandardSchema,
	ValidationResult, ValidatorErrors, field_key, flatten_issues, schema, validator_fn,
};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::{
		AbortSignal, AmbientContext, ContextFactory, RequestEvent, Settings, scope_request_event,
	};

	#[cfg(feature = "server-fn")]
	pub use crate::{ServerFn, ServerFnError};

	#[cfg(feature = "schema")]
	pub use crate::{
		DataValidator, Issue, MaybeAsync, Outcome, PathSegment, StandardSchema, ValidationResult,
		ValidatorErrors, schema, validator_fn,
	};

	#[cfg(feature = "schema")]
	pub use courier_schema::rules::{Rule, RuleExt};
}
