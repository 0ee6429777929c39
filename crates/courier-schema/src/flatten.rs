//! Field key derivation
//!
//! Property names are joined with `.` and every array index collapses into a
//! literal `[]` appended to the text before it:
//!
//! | path | key |
//! |---|---|
//! | `persons,0,name` | `persons[].name` |
//! | `arrayWithStrings,0` | `arrayWithStrings[]` |
//! | `matrix,0,1` | `matrix[][]` |
//! | `0,name` | `[].name` |
//!
//! Issues about an array itself (`expected == "array"`) take one more `[]`,
//! so a missing `tags` array reports under `tags[]`, the same key its
//! elements use.

use crate::issue::{Issue, PathSegment};
use crate::result::ValidatorErrors;

/// Derives the field key for an issue path.
///
/// Returns `None` for an empty path: such issues belong to the form as a
/// whole.
///
/// # Examples
///
/// ```
/// use courier_schema::{PathSegment, field_key};
///
/// let path = [PathSegment::from("persons"), PathSegment::from(0), PathSegment::from("name")];
/// assert_eq!(field_key(&path, None).as_deref(), Some("persons[].name"));
/// assert_eq!(field_key(&[], None), None);
/// ```
pub fn field_key(path: &[PathSegment], expected: Option<&str>) -> Option<String> {
	if path.is_empty() {
		return None;
	}

	let mut key = String::new();
	for (position, segment) in path.iter().enumerate() {
		match segment {
			PathSegment::Key(name) => {
				if position > 0 {
					key.push('.');
				}
				key.push_str(name);
			}
			PathSegment::Index(_) => key.push_str("[]"),
		}
	}
	if expected == Some("array") {
		key.push_str("[]");
	}
	Some(key)
}

/// Groups issue messages into form-level and per-field errors.
///
/// Messages keep issue order within `formErrors` and within each key.
pub fn flatten_issues(issues: &[Issue]) -> ValidatorErrors {
	let mut errors = ValidatorErrors::default();
	for issue in issues {
		match field_key(&issue.path, issue.expected.as_deref()) {
			Some(key) => errors
				.field_errors
				.entry(key)
				.or_default()
				.push(issue.message.clone()),
			None => errors.form_errors.push(issue.message.clone()),
		}
	}
	errors
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn path(segments: &[&str]) -> Vec<PathSegment> {
		segments
			.iter()
			.map(|s| match s.parse::<usize>() {
				Ok(index) => PathSegment::Index(index),
				Err(_) => PathSegment::from(*s),
			})
			.collect()
	}

	#[rstest]
	#[case(&["username"], None, "username")]
	#[case(&["persons", "0", "name"], None, "persons[].name")]
	#[case(&["arrayWithStrings", "3"], Some("string"), "arrayWithStrings[]")]
	#[case(&["arrayWithStrings"], Some("array"), "arrayWithStrings[]")]
	#[case(&["matrix", "0", "1"], Some("number"), "matrix[][]")]
	#[case(&["matrix", "0"], Some("array"), "matrix[][]")]
	#[case(&["preferences", "theme"], None, "preferences.theme")]
	#[case(&["0"], None, "[]")]
	#[case(&["0", "name"], None, "[].name")]
	#[case(&["", "a"], None, ".a")]
	#[case(&[""], None, "")]
	fn test_field_key(
		#[case] segments: &[&str],
		#[case] expected: Option<&str>,
		#[case] key: &str,
	) {
		assert_eq!(field_key(&path(segments), expected).as_deref(), Some(key));
	}

	#[rstest]
	fn test_empty_path_is_form_level() {
		assert_eq!(field_key(&[], Some("array")), None);
	}

	#[rstest]
	fn test_flatten_accumulates_in_issue_order() {
		// Arrange
		let issues = vec![
			Issue::new("String must contain at least 8 character(s)").at(path(&["password"])),
			Issue::new("Passwords do not match"),
			Issue::new("Expected string, received number").at(path(&["tags", "0"])),
			Issue::new("Invalid").at(path(&["password"])),
			Issue::new("Expected string, received null").at(path(&["tags", "2"])),
			Issue::new("Try again later"),
		];

		// Act
		let errors = flatten_issues(&issues);

		// Assert
		assert_eq!(
			errors.form_errors,
			vec!["Passwords do not match", "Try again later"]
		);
		assert_eq!(
			errors.field_errors["password"],
			vec!["String must contain at least 8 character(s)", "Invalid"]
		);
		assert_eq!(
			errors.field_errors["tags[]"],
			vec![
				"Expected string, received number",
				"Expected string, received null"
			]
		);
		assert_eq!(errors.field_errors.len(), 2);
	}

	#[rstest]
	fn test_flatten_no_issues_is_empty() {
		assert!(flatten_issues(&[]).is_empty());
	}

	fn segment() -> impl Strategy<Value = PathSegment> {
		prop_oneof![
			"[a-z]{1,8}".prop_map(PathSegment::Key),
			(0usize..100).prop_map(PathSegment::Index),
		]
	}

	proptest! {
		#[test]
		fn test_key_never_contains_indices(segments in prop::collection::vec(segment(), 1..6)) {
			let key = field_key(&segments, None).unwrap();
			prop_assert!(!key.chars().any(|c| c.is_ascii_digit()));
			let brackets = segments.iter().filter(|s| matches!(s, PathSegment::Index(_))).count();
			prop_assert_eq!(key.matches("[]").count(), brackets);
		}

		#[test]
		fn test_flatten_is_deterministic(
			paths in prop::collection::vec(prop::collection::vec(segment(), 0..4), 0..10)
		) {
			let issues: Vec<Issue> = paths
				.into_iter()
				.enumerate()
				.map(|(i, p)| Issue::new(format!("issue {}", i)).at(p))
				.collect();

			let first = flatten_issues(&issues);
			let second = flatten_issues(&issues);

			prop_assert_eq!(&first, &second);
			let total = first.form_errors.len()
				+ first.field_errors.values().map(Vec::len).sum::<usize>();
			prop_assert_eq!(total, issues.len());
		}
	}
}
