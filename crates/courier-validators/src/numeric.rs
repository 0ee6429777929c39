//! Numeric validators

use crate::{ValidationError, ValidationResult, Validator};
use std::fmt::Display;

/// Minimum value validator (inclusive)
#[derive(Debug, Clone)]
pub struct MinValueValidator<T> {
	min: T,
}

impl<T> MinValueValidator<T> {
	/// Creates a new MinValueValidator with the specified minimum value.
	///
	/// # Examples
	///
	/// ```
	/// use courier_validators::{MinValueValidator, Validator};
	///
	/// let validator = MinValueValidator::new(10);
	/// assert!(validator.validate(&15).is_ok());
	/// assert!(validator.validate(&10).is_ok());
	/// assert!(validator.validate(&5).is_err());
	/// ```
	pub fn new(min: T) -> Self {
		Self { min }
	}
}

impl<T: PartialOrd + Display + Send + Sync> Validator<T> for MinValueValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value >= &self.min {
			Ok(())
		} else {
			Err(ValidationError::TooSmall {
				value: value.to_string(),
				min: self.min.to_string(),
			})
		}
	}
}

/// Maximum value validator (inclusive)
#[derive(Debug, Clone)]
pub struct MaxValueValidator<T> {
	max: T,
}

impl<T> MaxValueValidator<T> {
	/// Creates a new MaxValueValidator with the specified maximum value.
	///
	/// # Examples
	///
	/// ```
	/// use courier_validators::{MaxValueValidator, Validator};
	///
	/// let validator = MaxValueValidator::new(20);
	/// assert!(validator.validate(&15).is_ok());
	/// assert!(validator.validate(&25).is_err());
	/// ```
	pub fn new(max: T) -> Self {
		Self { max }
	}
}

impl<T: PartialOrd + Display + Send + Sync> Validator<T> for MaxValueValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value <= &self.max {
			Ok(())
		} else {
			Err(ValidationError::TooLarge {
				value: value.to_string(),
				max: self.max.to_string(),
			})
		}
	}
}

/// Range validator (inclusive on both ends)
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
	min: T,
	max: T,
}

impl<T> RangeValidator<T> {
	pub fn new(min: T, max: T) -> Self {
		Self { min, max }
	}
}

impl<T: PartialOrd + Display + Send + Sync> Validator<T> for RangeValidator<T> {
	fn validate(&self, value: &T) -> ValidationResult<()> {
		if value < &self.min {
			Err(ValidationError::TooSmall {
				value: value.to_string(),
				min: self.min.to_string(),
			})
		} else if value > &self.max {
			Err(ValidationError::TooLarge {
				value: value.to_string(),
				max: self.max.to_string(),
			})
		} else {
			Ok(())
		}
	}
}

/// Rejects numbers with a fractional part
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValidator;

impl IntegerValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<f64> for IntegerValidator {
	fn validate(&self, value: &f64) -> ValidationResult<()> {
		if value.is_finite() && value.fract() == 0.0 {
			Ok(())
		} else {
			Err(ValidationError::NotAnInteger {
				value: value.to_string(),
			})
		}
	}
}
