//! Enumeration rule

use super::{Rule, issue_at, required, type_name};
use crate::issue::{Issue, PathSegment};
use courier_validators::{ChoiceValidator, Validator};
use serde_json::Value;

/// Accepts one of a fixed set of strings.
#[derive(Debug, Clone)]
pub struct EnumRule {
	choices: ChoiceValidator,
}

/// # Examples
///
/// ```
/// use courier_schema::rules::{Rule, enumeration};
/// use serde_json::json;
///
/// let role = enumeration(["user", "moderator", "admin"]);
/// let mut issues = Vec::new();
///
/// role.parse(Some(&json!("missing-role")), &[], &mut issues);
///
/// assert_eq!(
///     issues[0].message,
///     "Invalid enum value. Expected 'user' | 'moderator' | 'admin', received 'missing-role'"
/// );
/// ```
pub fn enumeration<I, S>(choices: I) -> EnumRule
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	EnumRule {
		choices: ChoiceValidator::new(choices),
	}
}

impl EnumRule {
	pub fn choices(&self) -> &[String] {
		self.choices.choices()
	}
}

impl Rule for EnumRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		match value {
			Some(Value::String(value)) => match self.choices.validate(value) {
				Ok(()) => Some(Value::String(value.clone())),
				Err(err) => {
					issues.push(issue_at(path, "enum", err.to_string()));
					None
				}
			},
			Some(other) => {
				let message = format!(
					"Expected {}, received {}",
					self.choices.expected(),
					type_name(other)
				);
				issues.push(issue_at(path, "enum", message));
				None
			}
			None => {
				issues.push(required(path, "enum"));
				None
			}
		}
	}
}
