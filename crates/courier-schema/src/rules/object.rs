//! Object rule and typed output

use super::{Rule, child_path, issue_at, required, type_mismatch};
use crate::issue::{Issue, PathSegment};
use crate::standard::{MaybeAsync, Outcome, StandardSchema};
use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

type RefineFn = Arc<dyn Fn(&Map<String, Value>) -> bool + Send + Sync>;

#[derive(Clone)]
struct Refinement {
	check: RefineFn,
	message: String,
}

/// A set of named fields, each with its own rule.
///
/// Used at the top level it is a [`StandardSchema`] whose output is the
/// parsed object; nested through [`field`](Self::field) it validates a
/// sub-object.
#[derive(Clone, Default)]
pub struct ObjectSchema {
	fields: Vec<(String, Arc<dyn Rule>)>,
	refinements: Vec<Refinement>,
}

pub fn object() -> ObjectSchema {
	ObjectSchema::default()
}

impl ObjectSchema {
	/// Adds a field. A later field with the same name replaces the earlier
	/// one in place.
	pub fn field(mut self, name: impl Into<String>, rule: impl Rule + 'static) -> Self {
		let name = name.into();
		let rule: Arc<dyn Rule> = Arc::new(rule);
		match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
			Some(slot) => slot.1 = rule,
			None => self.fields.push((name, rule)),
		}
		self
	}

	/// Adds a check over the whole parsed object.
	///
	/// Refinements run only when every field parsed, and report at the
	/// object's own position: a form-level error at the top level.
	///
	/// # Examples
	///
	/// ```
	/// use courier_schema::rules::{object, string};
	///
	/// let change_password = object()
	///     .field("password", string().min(8))
	///     .field("confirm", string())
	///     .refine(|data| data["password"] == data["confirm"], "Passwords do not match");
	/// # let _ = change_password;
	/// ```
	pub fn refine<F>(mut self, check: F, message: impl Into<String>) -> Self
	where
		F: Fn(&Map<String, Value>) -> bool + Send + Sync + 'static,
	{
		self.refinements.push(Refinement {
			check: Arc::new(check),
			message: message.into(),
		});
		self
	}

	/// Copies every field of `other` into this schema, `other` winning on
	/// name clashes. Refinements of both are kept.
	pub fn extend(mut self, other: ObjectSchema) -> Self {
		for (name, rule) in other.fields {
			match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
				Some(slot) => slot.1 = rule,
				None => self.fields.push((name, rule)),
			}
		}
		self.refinements.extend(other.refinements);
		self
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(name, _)| name.as_str())
	}

	/// Every key a failure of this schema can report in `fieldErrors`.
	///
	/// Built from the declared rules alone; fields declared with
	/// [`any`](super::any) are absent.
	pub fn field_keys(&self) -> Vec<String> {
		let mut keys = IndexSet::new();
		self.collect_keys("", &mut keys);
		keys.into_iter().collect()
	}

	/// Deserializes successful output into `T`.
	pub fn typed<T: DeserializeOwned + Send>(self) -> TypedSchema<T> {
		TypedSchema {
			schema: self,
			_output: PhantomData,
		}
	}
}

impl Rule for ObjectSchema {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		let input = match value {
			None => {
				issues.push(required(path, "object"));
				return None;
			}
			Some(Value::Object(input)) => input,
			Some(other) => {
				issues.push(type_mismatch(path, "object", other));
				return None;
			}
		};

		let before = issues.len();
		let mut output = Map::new();
		for (name, rule) in &self.fields {
			let field_path = child_path(path, PathSegment::Key(name.clone()));
			if let Some(parsed) = rule.parse(input.get(name), &field_path, issues) {
				output.insert(name.clone(), parsed);
			}
		}
		if issues.len() > before {
			return None;
		}

		for refinement in &self.refinements {
			if !(refinement.check)(&output) {
				issues.push(issue_at(path, "object", refinement.message.clone()));
			}
		}
		(issues.len() == before).then_some(Value::Object(output))
	}

	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		if !key.is_empty() {
			keys.insert(key.to_string());
		}
		for (name, rule) in &self.fields {
			let child = if key.is_empty() {
				name.clone()
			} else {
				format!("{}.{}", key, name)
			};
			rule.collect_keys(&child, keys);
		}
	}
}

impl ObjectSchema {
	fn run(&self, input: &Value) -> Outcome<Value> {
		let mut issues = Vec::new();
		match self.parse(Some(input), &[], &mut issues) {
			Some(output) if issues.is_empty() => Outcome::Success(output),
			_ => Outcome::Failure(issues),
		}
	}
}

impl StandardSchema for ObjectSchema {
	type Output = Value;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<Value>> {
		self.run(input).into()
	}
}

impl fmt::Debug for ObjectSchema {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ObjectSchema")
			.field("fields", &self.field_names().collect::<Vec<_>>())
			.field("refinements", &self.refinements.len())
			.finish()
	}
}

/// An [`ObjectSchema`] whose output is deserialized into `T`.
///
/// A parsed object that does not deserialize into `T` is reported as a
/// form-level issue.
pub struct TypedSchema<T> {
	schema: ObjectSchema,
	_output: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
	pub fn field_keys(&self) -> Vec<String> {
		self.schema.field_keys()
	}
}

impl<T: DeserializeOwned + Send> StandardSchema for TypedSchema<T> {
	type Output = T;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<T>> {
		match self.schema.run(input) {
			Outcome::Success(value) => match serde_json::from_value(value) {
				Ok(typed) => Outcome::Success(typed),
				Err(err) => Outcome::Failure(vec![Issue::new(err.to_string())]),
			},
			Outcome::Failure(issues) => Outcome::Failure(issues),
		}
		.into()
	}
}

impl<T> Clone for TypedSchema<T> {
	fn clone(&self) -> Self {
		Self {
			schema: self.schema.clone(),
			_output: PhantomData,
		}
	}
}

impl<T> fmt::Debug for TypedSchema<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypedSchema")
			.field("schema", &self.schema)
			.field("output", &std::any::type_name::<T>())
			.finish()
	}
}
