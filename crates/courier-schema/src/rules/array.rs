//! Array rule

use super::{Rule, child_path, issue_at, required, type_mismatch};
use crate::issue::{Issue, PathSegment};
use courier_validators::ValidationError;
use indexmap::IndexSet;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Accepts arrays whose elements all satisfy one rule.
///
/// Issues about the array itself (missing, wrong type, length) carry
/// `expected = "array"` and therefore report under `name[]` together with
/// the element issues.
#[derive(Clone)]
pub struct ArrayRule {
	element: Arc<dyn Rule>,
	min: Option<usize>,
	max: Option<usize>,
}

pub fn array(element: impl Rule + 'static) -> ArrayRule {
	ArrayRule {
		element: Arc::new(element),
		min: None,
		max: None,
	}
}

impl ArrayRule {
	pub fn min(mut self, min: usize) -> Self {
		self.min = Some(min);
		self
	}

	pub fn max(mut self, max: usize) -> Self {
		self.max = Some(max);
		self
	}

	pub fn nonempty(self) -> Self {
		self.min(1)
	}
}

impl Rule for ArrayRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		let items = match value {
			None => {
				issues.push(required(path, "array"));
				return None;
			}
			Some(Value::Array(items)) => items,
			Some(other) => {
				issues.push(type_mismatch(path, "array", other));
				return None;
			}
		};

		let before = issues.len();
		let length = items.len();
		if let Some(min) = self.min.filter(|min| length < *min) {
			let err = ValidationError::TooFewItems { length, min };
			issues.push(issue_at(path, "array", err.to_string()));
		}
		if let Some(max) = self.max.filter(|max| length > *max) {
			let err = ValidationError::TooManyItems { length, max };
			issues.push(issue_at(path, "array", err.to_string()));
		}

		let mut output = Vec::with_capacity(length);
		for (index, item) in items.iter().enumerate() {
			let item_path = child_path(path, PathSegment::Index(index));
			if let Some(parsed) = self.element.parse(Some(item), &item_path, issues) {
				output.push(parsed);
			}
		}

		(issues.len() == before).then_some(Value::Array(output))
	}

	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		let key = format!("{}[]", key);
		keys.insert(key.clone());
		self.element.collect_keys(&key, keys);
	}
}

impl fmt::Debug for ArrayRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ArrayRule")
			.field("min", &self.min)
			.field("max", &self.max)
			.finish_non_exhaustive()
	}
}
