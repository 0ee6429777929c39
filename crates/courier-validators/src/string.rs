//! String validators

use crate::{ValidationError, ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

// Hyphenated 8-4-4-4-12 hex form only; braces, URNs and the simple form are rejected.
static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
		.expect("UUID_REGEX: invalid regex pattern")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9_'+\-.]*[a-zA-Z0-9_+\-]@([a-zA-Z0-9][a-zA-Z0-9\-]*\.)+[a-zA-Z]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// Any scheme followed by a non-empty authority or path.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:(//)?[^\s/?#]+[^\s]*$")
		.expect("URL_REGEX: invalid regex pattern")
});

/// Minimum length validator
///
/// Length is measured in characters, not bytes.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	/// Creates a new MinLengthValidator with the specified minimum length.
	///
	/// # Examples
	///
	/// ```
	/// use courier_validators::{MinLengthValidator, Validator};
	///
	/// let validator = MinLengthValidator::new(5);
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("hi").is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Validator<str> for MinLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length >= self.min {
			Ok(())
		} else {
			Err(ValidationError::TooShort {
				length,
				min: self.min,
			})
		}
	}
}

/// Maximum length validator
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
	max: usize,
}

impl MaxLengthValidator {
	/// Creates a new MaxLengthValidator with the specified maximum length.
	///
	/// # Examples
	///
	/// ```
	/// use courier_validators::{MaxLengthValidator, Validator};
	///
	/// let validator = MaxLengthValidator::new(10);
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("hello world").is_err());
	/// ```
	pub fn new(max: usize) -> Self {
		Self { max }
	}
}

impl Validator<str> for MaxLengthValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		let length = value.chars().count();
		if length <= self.max {
			Ok(())
		} else {
			Err(ValidationError::TooLong {
				length,
				max: self.max,
			})
		}
	}
}

/// Regex validator
#[derive(Debug, Clone)]
pub struct RegexValidator {
	regex: Regex,
	message: String,
}

impl RegexValidator {
	/// Creates a new RegexValidator with the specified regex pattern.
	///
	/// The default failure message is `"Invalid"`.
	///
	/// # Examples
	///
	/// ```
	/// use courier_validators::{RegexValidator, Validator};
	///
	/// let validator = RegexValidator::new(r"^\d{3}-\d{4}$").unwrap();
	/// assert!(validator.validate("123-4567").is_ok());
	/// assert!(validator.validate("invalid").is_err());
	/// ```
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		Ok(Self::from_regex(Regex::new(pattern)?))
	}

	pub fn from_regex(regex: Regex) -> Self {
		Self {
			regex,
			message: "Invalid".to_string(),
		}
	}

	/// Sets a custom error message for the validator.
	///
	/// # Examples
	///
	/// ```
	/// use courier_validators::{RegexValidator, Validator, ValidationError};
	///
	/// let validator = RegexValidator::new(r"^\d+$")
	///     .unwrap()
	///     .with_message("Value must contain only digits");
	///
	/// assert_eq!(
	///     validator.validate("abc"),
	///     Err(ValidationError::PatternMismatch("Value must contain only digits".into()))
	/// );
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}

	pub fn pattern(&self) -> &str {
		self.regex.as_str()
	}
}

impl Validator<str> for RegexValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::PatternMismatch(self.message.clone()))
		}
	}
}

/// UUID validator (hyphenated form)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidValidator;

impl UuidValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for UuidValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if UUID_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidUuid)
		}
	}
}

/// Email validator
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		// Leading dots and consecutive dots are not covered by the pattern
		if value.starts_with('.') || value.contains("..") || !EMAIL_REGEX.is_match(value) {
			Err(ValidationError::InvalidEmail)
		} else {
			Ok(())
		}
	}
}

/// URL validator
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlValidator;

impl UrlValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for UrlValidator {
	fn validate(&self, value: &str) -> ValidationResult<()> {
		if URL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::InvalidUrl)
		}
	}
}
