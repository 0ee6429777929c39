//! Rule-free fields

use super::Rule;
use crate::issue::{Issue, PathSegment};
use indexmap::IndexSet;
use serde_json::Value;

/// Passes any value through, including absence.
///
/// Carries no checks, so it never reports issues and registers no field key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRule;

pub fn any() -> AnyRule {
	AnyRule
}

impl Rule for AnyRule {
	fn parse(
		&self,
		value: Option<&Value>,
		_path: &[PathSegment],
		_issues: &mut Vec<Issue>,
	) -> Option<Value> {
		value.cloned()
	}

	fn collect_keys(&self, _key: &str, _keys: &mut IndexSet<String>) {}
}
