//! Validation issues and their location in the input

use std::fmt;

/// One step into the input structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
	/// Property name of an object
	Key(String),
	/// Position in an array
	Index(usize),
}

impl From<&str> for PathSegment {
	fn from(key: &str) -> Self {
		Self::Key(key.to_string())
	}
}

impl From<String> for PathSegment {
	fn from(key: String) -> Self {
		Self::Key(key)
	}
}

impl From<usize> for PathSegment {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) => f.write_str(key),
			Self::Index(index) => write!(f, "{}", index),
		}
	}
}

/// A single validation failure.
///
/// `expected` names the type the failing rule accepts (`"string"`,
/// `"array"`, ...). It is informational except for `"array"`, which marks
/// an issue about the array itself rather than one of its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
	pub message: String,
	pub path: Vec<PathSegment>,
	pub expected: Option<String>,
}

impl Issue {
	/// Creates a form-level issue (empty path).
	///
	/// # Examples
	///
	/// ```
	/// use courier_schema::{Issue, PathSegment};
	///
	/// let issue = Issue::new("Required").at([
	///     PathSegment::from("persons"),
	///     PathSegment::Index(0),
	///     PathSegment::from("name"),
	/// ]);
	/// assert_eq!(issue.path[1], PathSegment::Index(0));
	/// assert!(issue.expected.is_none());
	/// ```
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			path: Vec::new(),
			expected: None,
		}
	}

	pub fn at(mut self, path: impl IntoIterator<Item = PathSegment>) -> Self {
		self.path = path.into_iter().collect();
		self
	}

	pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
		self.expected = Some(expected.into());
		self
	}

	pub fn is_form_level(&self) -> bool {
		self.path.is_empty()
	}
}

impl fmt::Display for Issue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_empty() {
			return f.write_str(&self.message);
		}
		let path = self
			.path
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(",");
		write!(f, "{}: {}", path, self.message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_display_joins_path_with_commas() {
		let issue = Issue::new("Expected number, received string").at([
			PathSegment::from("persons"),
			PathSegment::from(0),
			PathSegment::from("age"),
		]);

		assert_eq!(
			issue.to_string(),
			"persons,0,age: Expected number, received string"
		);
		assert!(!issue.is_form_level());
	}

	#[rstest]
	fn test_form_level_issue_displays_message_only() {
		let issue = Issue::new("Passwords do not match");

		assert!(issue.is_form_level());
		assert_eq!(issue.to_string(), "Passwords do not match");
	}
}
