//! Built-in schema rules
//!
//! Rules parse one JSON value each and report problems as [`Issue`]s. They
//! compose into an [`ObjectSchema`] or a [`UnionRule`], both of which
//! implement [`StandardSchema`](crate::StandardSchema) and can be handed to
//! [`schema`](crate::schema).
//!
//! ```
//! use courier_schema::rules::{RuleExt, array, boolean, enumeration, object, string};
//!
//! let signup = object()
//!     .field("username", string().min(4))
//!     .field("roles", array(enumeration(["user", "admin"])).default_value(vec!["user"]))
//!     .field("newsletter", boolean().optional());
//!
//! assert_eq!(signup.field_keys(), ["username", "roles[]", "newsletter"]);
//! ```
//!
//! Every check on a value runs, so one field can collect several messages.
//! Keys of the input that no rule mentions are dropped from the output.

mod any;
mod array;
mod boolean;
mod date;
mod enumeration;
mod number;
mod object;
mod string;
mod union;

pub use any::{AnyRule, any};
pub use array::{ArrayRule, array};
pub use boolean::{BooleanRule, boolean};
pub use date::{DateRule, date, format_date};
pub use enumeration::{EnumRule, enumeration};
pub use number::{NumberRule, number};
pub use object::{ObjectSchema, TypedSchema, object};
pub use string::{StringRule, string};
pub use union::{UnionRule, union};

use crate::issue::{Issue, PathSegment};
use indexmap::IndexSet;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Parses a single value.
pub trait Rule: Send + Sync {
	/// Parses `value` found at `path`, or `None` when the key is absent.
	///
	/// Pushes one issue per failed check and returns the parsed value only
	/// when this call added no issues. `None` with no new issues means an
	/// absent optional value.
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value>;

	/// Registers the field keys this rule can report under, given the key of
	/// its own position.
	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		keys.insert(key.to_string());
	}
}

impl<R: Rule + ?Sized> Rule for Box<R> {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		(**self).parse(value, path, issues)
	}

	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		(**self).collect_keys(key, keys)
	}
}

/// Wrappers available on every rule.
pub trait RuleExt: Rule + Sized + 'static {
	/// Accepts an absent value, leaving it out of the output.
	fn optional(self) -> Optional<Self> {
		Optional { inner: self }
	}

	/// Substitutes `value` when the key is absent.
	fn default_value(self, value: impl Into<Value>) -> WithDefault<Self> {
		let value = value.into();
		self.default_with(move || value.clone())
	}

	/// Substitutes the result of `f`, evaluated on each parse, when the key
	/// is absent.
	fn default_with<F>(self, f: F) -> WithDefault<Self>
	where
		F: Fn() -> Value + Send + Sync + 'static,
	{
		WithDefault {
			inner: self,
			default: Arc::new(f),
		}
	}

	fn boxed(self) -> Box<dyn Rule> {
		Box::new(self)
	}
}

impl<R: Rule + Sized + 'static> RuleExt for R {}

/// See [`RuleExt::optional`].
#[derive(Debug, Clone)]
pub struct Optional<R> {
	inner: R,
}

impl<R: Rule> Rule for Optional<R> {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		value.and_then(|value| self.inner.parse(Some(value), path, issues))
	}

	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		self.inner.collect_keys(key, keys)
	}
}

/// See [`RuleExt::default_value`] and [`RuleExt::default_with`].
#[derive(Clone)]
pub struct WithDefault<R> {
	inner: R,
	default: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl<R: Rule> Rule for WithDefault<R> {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		match value {
			Some(value) => self.inner.parse(Some(value), path, issues),
			None => Some((self.default)()),
		}
	}

	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		self.inner.collect_keys(key, keys)
	}
}

impl<R: fmt::Debug> fmt::Debug for WithDefault<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WithDefault")
			.field("inner", &self.inner)
			.finish_non_exhaustive()
	}
}

/// Name of a JSON value's type as it appears in messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

pub(crate) fn issue_at(
	path: &[PathSegment],
	expected: &str,
	message: impl Into<String>,
) -> Issue {
	Issue::new(message)
		.at(path.iter().cloned())
		.with_expected(expected)
}

pub(crate) fn required(path: &[PathSegment], expected: &str) -> Issue {
	issue_at(path, expected, "Required")
}

pub(crate) fn type_mismatch(path: &[PathSegment], expected: &str, received: &Value) -> Issue {
	issue_at(
		path,
		expected,
		format!("Expected {}, received {}", expected, type_name(received)),
	)
}

/// Appends `child` to `path` for a nested parse.
pub(crate) fn child_path(path: &[PathSegment], child: PathSegment) -> Vec<PathSegment> {
	let mut nested = Vec::with_capacity(path.len() + 1);
	nested.extend_from_slice(path);
	nested.push(child);
	nested
}
