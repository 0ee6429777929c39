//! Union rule

use super::{Rule, issue_at, required};
use crate::issue::{Issue, PathSegment};
use crate::standard::{MaybeAsync, Outcome, StandardSchema};
use indexmap::IndexSet;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Accepts a value matching any one of several rules.
///
/// Members are tried in order and the first that parses without issues
/// wins. When none does, the member issues are discarded and a single
/// `Invalid input` is reported at the union's own position.
#[derive(Clone)]
pub struct UnionRule {
	members: Vec<Arc<dyn Rule>>,
}

/// # Examples
///
/// ```
/// use courier_schema::rules::{RuleExt, Rule, number, string, union};
/// use serde_json::json;
///
/// let id = union([string().uuid().boxed(), number().int().boxed()]);
/// let mut issues = Vec::new();
///
/// assert_eq!(id.parse(Some(&json!(42)), &[], &mut issues), Some(json!(42)));
/// assert_eq!(id.parse(Some(&json!(true)), &[], &mut issues), None);
/// assert_eq!(issues[0].message, "Invalid input");
/// ```
pub fn union<I>(members: I) -> UnionRule
where
	I: IntoIterator<Item = Box<dyn Rule>>,
{
	UnionRule {
		members: members.into_iter().map(Arc::from).collect(),
	}
}

impl UnionRule {
	/// Adds another member, tried after the existing ones.
	pub fn or(mut self, rule: impl Rule + 'static) -> Self {
		self.members.push(Arc::new(rule));
		self
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Every key a failure of any member can report, in member order.
	pub fn field_keys(&self) -> Vec<String> {
		let mut keys = IndexSet::new();
		self.collect_keys("", &mut keys);
		keys.into_iter().collect()
	}
}

impl Rule for UnionRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		for member in &self.members {
			let mut attempt = Vec::new();
			let parsed = member.parse(value, path, &mut attempt);
			if attempt.is_empty() {
				return parsed;
			}
		}

		match value {
			None => issues.push(required(path, "union")),
			Some(_) => issues.push(issue_at(path, "union", "Invalid input")),
		}
		None
	}

	fn collect_keys(&self, key: &str, keys: &mut IndexSet<String>) {
		for member in &self.members {
			member.collect_keys(key, keys);
		}
	}
}

impl StandardSchema for UnionRule {
	type Output = Value;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<Value>> {
		let mut issues = Vec::new();
		match self.parse(Some(input), &[], &mut issues) {
			Some(output) if issues.is_empty() => Outcome::Success(output),
			_ => Outcome::Failure(issues),
		}
		.into()
	}
}

impl fmt::Debug for UnionRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UnionRule")
			.field("members", &self.members.len())
			.finish()
	}
}
