//! Boolean rule

use super::{Rule, required, type_mismatch};
use crate::issue::{Issue, PathSegment};
use serde_json::Value;

/// Accepts `true` and `false` only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRule;

pub fn boolean() -> BooleanRule {
	BooleanRule
}

impl Rule for BooleanRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		match value {
			Some(value @ Value::Bool(_)) => Some(value.clone()),
			Some(other) => {
				issues.push(type_mismatch(path, "boolean", other));
				None
			}
			None => {
				issues.push(required(path, "boolean"));
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(true), true)]
	#[case(json!(false), true)]
	#[case(json!("true"), false)]
	#[case(json!(1), false)]
	fn test_only_booleans_accepted(#[case] value: Value, #[case] accepted: bool) {
		let mut issues = Vec::new();

		let output = boolean().parse(Some(&value), &[], &mut issues);

		assert_eq!(output.is_some(), accepted);
		assert_eq!(issues.is_empty(), accepted);
	}
}
