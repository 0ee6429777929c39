//! Validation errors

/// A failed check. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("String must contain at least {min} character(s)")]
	TooShort { length: usize, min: usize },

	#[error("String must contain at most {max} character(s)")]
	TooLong { length: usize, max: usize },

	#[error("Number must be greater than or equal to {min}")]
	TooSmall { value: String, min: String },

	#[error("Number must be less than or equal to {max}")]
	TooLarge { value: String, max: String },

	#[error("Array must contain at least {min} element(s)")]
	TooFewItems { length: usize, min: usize },

	#[error("Array must contain at most {max} element(s)")]
	TooManyItems { length: usize, max: usize },

	#[error("Expected integer, received float")]
	NotAnInteger { value: String },

	#[error("{0}")]
	PatternMismatch(String),

	#[error("Invalid email")]
	InvalidEmail,

	#[error("Invalid uuid")]
	InvalidUuid,

	#[error("Invalid url")]
	InvalidUrl,

	#[error(
		"Invalid enum value. Expected {}, received '{received}'",
		quote_choices(.expected)
	)]
	InvalidChoice {
		expected: Vec<String>,
		received: String,
	},

	#[error("{0}")]
	Custom(String),
}

/// `'a' | 'b' | 'c'`
pub(crate) fn quote_choices(choices: &[String]) -> String {
	choices
		.iter()
		.map(|choice| format!("'{}'", choice))
		.collect::<Vec<_>>()
		.join(" | ")
}

pub type ValidationResult<T> = Result<T, ValidationError>;
