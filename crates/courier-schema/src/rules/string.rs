//! String rule

use super::{Rule, issue_at, required, type_mismatch};
use crate::issue::{Issue, PathSegment};
use courier_validators::{
	EmailValidator, MaxLengthValidator, MinLengthValidator, RegexValidator, UrlValidator,
	UuidValidator, Validator,
};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Accepts strings, running every attached check.
#[derive(Clone, Default)]
pub struct StringRule {
	checks: Vec<Arc<dyn Validator<str>>>,
}

pub fn string() -> StringRule {
	StringRule::default()
}

impl StringRule {
	/// Minimum length in characters
	pub fn min(self, min: usize) -> Self {
		self.check(MinLengthValidator::new(min))
	}

	/// Maximum length in characters
	pub fn max(self, max: usize) -> Self {
		self.check(MaxLengthValidator::new(max))
	}

	pub fn email(self) -> Self {
		self.check(EmailValidator::new())
	}

	pub fn uuid(self) -> Self {
		self.check(UuidValidator::new())
	}

	pub fn url(self) -> Self {
		self.check(UrlValidator::new())
	}

	/// Requires a match of `regex`; the message is `"Invalid"`.
	pub fn regex(self, regex: Regex) -> Self {
		self.check(RegexValidator::from_regex(regex))
	}

	/// Attaches any string validator.
	///
	/// # Examples
	///
	/// ```
	/// use courier_schema::rules::string;
	/// use courier_validators::RegexValidator;
	///
	/// let slug = string().check(
	///     RegexValidator::new(r"^[a-z0-9-]+$")
	///         .unwrap()
	///         .with_message("Only lowercase letters, digits and dashes"),
	/// );
	/// # let _ = slug;
	/// ```
	pub fn check(mut self, validator: impl Validator<str> + 'static) -> Self {
		self.checks.push(Arc::new(validator));
		self
	}
}

impl Rule for StringRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		let value = match value {
			None => {
				issues.push(required(path, "string"));
				return None;
			}
			Some(Value::String(value)) => value,
			Some(other) => {
				issues.push(type_mismatch(path, "string", other));
				return None;
			}
		};

		let before = issues.len();
		for check in &self.checks {
			if let Err(err) = check.validate(value) {
				issues.push(issue_at(path, "string", err.to_string()));
			}
		}
		(issues.len() == before).then(|| Value::String(value.clone()))
	}
}

impl fmt::Debug for StringRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StringRule")
			.field("checks", &self.checks.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn messages(rule: &StringRule, value: Value) -> Vec<String> {
		let mut issues = Vec::new();
		rule.parse(Some(&value), &[PathSegment::from("password")], &mut issues);
		issues.into_iter().map(|issue| issue.message).collect()
	}

	#[rstest]
	fn test_all_checks_run_in_order() {
		let rule = string()
			.min(8)
			.regex(Regex::new(r"^[a-zA-Z]+$").unwrap());

		assert_eq!(
			messages(&rule, json!("short1")),
			vec!["String must contain at least 8 character(s)", "Invalid"]
		);
	}

	#[rstest]
	fn test_valid_string_is_output_unchanged() {
		let mut issues = Vec::new();

		let output = string()
			.min(4)
			.max(20)
			.parse(Some(&json!("test")), &[], &mut issues);

		assert_eq!(output, Some(json!("test")));
		assert!(issues.is_empty());
	}

	#[rstest]
	#[case(json!(null), "Expected string, received null")]
	#[case(json!(42), "Expected string, received number")]
	#[case(json!(["a"]), "Expected string, received array")]
	fn test_type_mismatch(#[case] value: Value, #[case] message: &str) {
		assert_eq!(messages(&string().min(1), value), vec![message]);
	}

	#[rstest]
	fn test_missing_is_required() {
		let mut issues = Vec::new();

		string().parse(None, &[PathSegment::from("username")], &mut issues);

		assert_eq!(issues.len(), 1);
		assert_eq!(issues[0].message, "Required");
		assert_eq!(issues[0].path, vec![PathSegment::from("username")]);
		assert_eq!(issues[0].expected.as_deref(), Some("string"));
	}

	#[rstest]
	#[case(string().uuid(), "invalid-uuid", "Invalid uuid")]
	#[case(string().email(), "nobody", "Invalid email")]
	#[case(string().url(), "nowhere", "Invalid url")]
	fn test_format_checks(#[case] rule: StringRule, #[case] value: &str, #[case] message: &str) {
		assert_eq!(messages(&rule, json!(value)), vec![message]);
	}
}
