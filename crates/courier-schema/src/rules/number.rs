//! Number rule

use super::{Rule, issue_at, required, type_mismatch};
use crate::issue::{Issue, PathSegment};
use courier_validators::{IntegerValidator, MaxValueValidator, MinValueValidator, Validator};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Accepts JSON numbers. Numeric strings are not coerced.
#[derive(Clone, Default)]
pub struct NumberRule {
	checks: Vec<Arc<dyn Validator<f64>>>,
}

pub fn number() -> NumberRule {
	NumberRule::default()
}

impl NumberRule {
	pub fn min(self, min: f64) -> Self {
		self.check(MinValueValidator::new(min))
	}

	pub fn max(self, max: f64) -> Self {
		self.check(MaxValueValidator::new(max))
	}

	pub fn int(self) -> Self {
		self.check(IntegerValidator::new())
	}

	pub fn check(mut self, validator: impl Validator<f64> + 'static) -> Self {
		self.checks.push(Arc::new(validator));
		self
	}
}

impl Rule for NumberRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		let (raw, number) = match value {
			None => {
				issues.push(required(path, "number"));
				return None;
			}
			Some(raw @ Value::Number(number)) => (raw, number),
			Some(other) => {
				issues.push(type_mismatch(path, "number", other));
				return None;
			}
		};

		// Every serde_json number without arbitrary precision fits an f64
		let Some(number) = number.as_f64() else {
			issues.push(issue_at(path, "number", "Invalid number"));
			return None;
		};

		let before = issues.len();
		for check in &self.checks {
			if let Err(err) = check.validate(&number) {
				issues.push(issue_at(path, "number", err.to_string()));
			}
		}
		(issues.len() == before).then(|| raw.clone())
	}
}

impl fmt::Debug for NumberRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NumberRule")
			.field("checks", &self.checks.len())
			.finish()
	}
}
