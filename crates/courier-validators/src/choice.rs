//! Choice (enumeration) validator

use crate::{ValidationError, ValidationResult, Validator};

/// Accepts only one of a fixed list of strings.
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
	choices: Vec<String>,
}

impl ChoiceValidator {
	/// # Examples
	///
	/// ```
	/// use courier_validators::{ChoiceValidator, Validator};
	///
	/// let role = ChoiceValidator::new(["user", "moderator", "admin"]);
	/// assert!(role.validate("admin").is_ok());
	/// assert_eq!(
	///     role.validate("root").unwrap_err().to_string(),
	///     "Invalid enum value. Expected 'user' | 'moderator' | 'admin', received 'root'"
	/// );
	/// ```
	pub fn new<I, S>(choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			choices: choices.into_iter().map(Into::into).collect(),
		}
	}

	pub fn choices(&self) -> &[String] {
		&self.choices
	}

	/// `'a' | 'b'`, as used in messages
	pub fn expected(&self) -> String {
		crate::errors::quote_choices(&self.choices)
	}
}

impl Validator<str> for ChoiceValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.choices.iter().any(|choice| choice == value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidChoice {
				expected: self.choices.clone(),
				received: value.to_string(),
			})
		}
	}
}
