//! Validators for Courier schemas
//!
//! Small, composable checks over a single value. Each failure is a
//! [`ValidationError`] whose `Display` output is the message shown to users
//! next to the offending form field.

pub mod choice;
pub mod errors;
pub mod numeric;
pub mod string;

pub use choice::ChoiceValidator;
pub use errors::{ValidationError, ValidationResult};
pub use numeric::{IntegerValidator, MaxValueValidator, MinValueValidator, RangeValidator};
pub use string::{
	EmailValidator, MaxLengthValidator, MinLengthValidator, RegexValidator, UrlValidator,
	UuidValidator,
};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::Validator;
	pub use crate::choice::*;
	pub use crate::errors::*;
	pub use crate::numeric::*;
	pub use crate::string::*;
}

/// Trait for validators
pub trait Validator<T: ?Sized>: Send + Sync {
	fn validate(&self, value: &T) -> ValidationResult<()>;
}
