//! Normalized validation results

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Errors grouped for display next to a form.
///
/// Serializes as `{"formErrors": [...], "fieldErrors": {"key": [...]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorErrors {
	pub form_errors: Vec<String>,
	pub field_errors: IndexMap<String, Vec<String>>,
}

impl ValidatorErrors {
	pub fn is_empty(&self) -> bool {
		self.form_errors.is_empty() && self.field_errors.is_empty()
	}

	/// Messages recorded under `key`, empty when there are none.
	pub fn field(&self, key: &str) -> &[String] {
		self.field_errors.get(key).map(Vec::as_slice).unwrap_or(&[])
	}
}

/// Outcome of [`DataValidator::validate`](crate::DataValidator::validate).
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "status": 400, "error": {...}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
	Success { data: T },
	Failure { status: u16, error: ValidatorErrors },
}

impl<T> ValidationResult<T> {
	pub fn success(data: T) -> Self {
		Self::Success { data }
	}

	/// A failure with the default status `400`.
	pub fn failure(error: ValidatorErrors) -> Self {
		Self::Failure { status: 400, error }
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}

	pub fn data(&self) -> Option<&T> {
		match self {
			Self::Success { data } => Some(data),
			Self::Failure { .. } => None,
		}
	}

	pub fn error(&self) -> Option<&ValidatorErrors> {
		match self {
			Self::Success { .. } => None,
			Self::Failure { error, .. } => Some(error),
		}
	}

	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Success { .. } => None,
			Self::Failure { status, .. } => Some(*status),
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
		match self {
			Self::Success { data } => ValidationResult::Success { data: f(data) },
			Self::Failure { status, error } => ValidationResult::Failure { status, error },
		}
	}

	pub fn into_result(self) -> Result<T, ValidatorErrors> {
		match self {
			Self::Success { data } => Ok(data),
			Self::Failure { error, .. } => Err(error),
		}
	}
}

impl<T: Serialize> Serialize for ValidationResult<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Success { data } => {
				let mut state = serializer.serialize_struct("ValidationResult", 2)?;
				state.serialize_field("success", &true)?;
				state.serialize_field("data", data)?;
				state.end()
			}
			Self::Failure { status, error } => {
				let mut state = serializer.serialize_struct("ValidationResult", 3)?;
				state.serialize_field("success", &false)?;
				state.serialize_field("status", status)?;
				state.serialize_field("error", error)?;
				state.end()
			}
		}
	}
}
