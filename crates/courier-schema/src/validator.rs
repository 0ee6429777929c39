//! Validators consumed by request handling code

use crate::flatten::flatten_issues;
use crate::result::ValidationResult;
use crate::standard::{Outcome, StandardSchema};
use async_trait::async_trait;
use courier_core::{RequestEvent, Settings};
use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Validates raw request data in the context of a request.
///
/// Validation failures are values, never errors: callers inspect the
/// returned [`ValidationResult`] and decide how to surface it.
#[async_trait]
pub trait DataValidator: Send + Sync {
	type Output: Send;

	async fn validate(&self, event: &RequestEvent, input: Value) -> ValidationResult<Self::Output>;
}

/// Adapter from a [`StandardSchema`] to a [`DataValidator`].
pub struct SchemaValidator<S> {
	schema: S,
	failure_status: u16,
}

/// Wraps `schema` so its outcomes come back normalized.
///
/// # Examples
///
/// ```
/// use courier_core::RequestEvent;
/// use courier_schema::rules::{object, string};
/// use courier_schema::{DataValidator, schema};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let login = schema(object().field("username", string()).field("password", string()));
///
/// let result = login.validate(&RequestEvent::synthetic(), json!({})).await;
///
/// assert_eq!(
///     serde_json::to_value(&result).unwrap(),
///     json!({
///         "success": false,
///         "status": 400,
///         "error": {
///             "formErrors": [],
///             "fieldErrors": {"username": ["Required"], "password": ["Required"]}
///         }
///     })
/// );
/// # }
/// ```
pub fn schema<S: StandardSchema>(schema: S) -> SchemaValidator<S> {
	SchemaValidator {
		schema,
		failure_status: 400,
	}
}

impl<S: StandardSchema> SchemaValidator<S> {
	/// Overrides the status reported with failures.
	///
	/// `status` must be a 4xx code, as `validation.failure_status` is.
	pub fn with_failure_status(mut self, status: u16) -> Self {
		debug_assert!(
			(400..500).contains(&status),
			"failure status must be 4xx, got {}",
			status
		);
		self.failure_status = status;
		self
	}

	/// Applies `validation.failure_status`.
	pub fn with_settings(self, settings: &Settings) -> Self {
		self.with_failure_status(settings.validation.failure_status)
	}

	pub fn failure_status(&self) -> u16 {
		self.failure_status
	}

	pub fn inner(&self) -> &S {
		&self.schema
	}
}

#[async_trait]
impl<S: StandardSchema> DataValidator for SchemaValidator<S> {
	type Output = S::Output;

	async fn validate(&self, event: &RequestEvent, input: Value) -> ValidationResult<S::Output> {
		tracing::trace!(request_id = %event.id(), "validating input");

		match self.schema.validate(&input).resolve().await {
			Outcome::Success(data) => ValidationResult::Success { data },
			Outcome::Failure(issues) => ValidationResult::Failure {
				status: self.failure_status,
				error: flatten_issues(&issues),
			},
		}
	}
}

impl<S> fmt::Debug for SchemaValidator<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SchemaValidator")
			.field("schema", &std::any::type_name::<S>())
			.field("failure_status", &self.failure_status)
			.finish()
	}
}

/// A [`DataValidator`] backed by an async closure.
pub struct ValidatorFn<F> {
	f: F,
}

/// Builds a validator from a closure returning a [`ValidationResult`].
///
/// Useful when validation depends on the request itself, such as checking a
/// header or a scoped value.
pub fn validator_fn<F, Fut, T>(f: F) -> ValidatorFn<F>
where
	F: Fn(RequestEvent, Value) -> Fut + Send + Sync,
	Fut: Future<Output = ValidationResult<T>> + Send,
	T: Send,
{
	ValidatorFn { f }
}

#[async_trait]
impl<F, Fut, T> DataValidator for ValidatorFn<F>
where
	F: Fn(RequestEvent, Value) -> Fut + Send + Sync,
	Fut: Future<Output = ValidationResult<T>> + Send,
	T: Send,
{
	type Output = T;

	async fn validate(&self, event: &RequestEvent, input: Value) -> ValidationResult<T> {
		(self.f)(event.clone(), input).await
	}
}

impl<F> fmt::Debug for ValidatorFn<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValidatorFn").finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::issue::{Issue, PathSegment};
	use crate::result::ValidatorErrors;
	use crate::standard::MaybeAsync;
	use rstest::{fixture, rstest};
	use serde_json::json;

	/// Reports every key of the input object as an issue.
	struct RejectKeys;

	impl StandardSchema for RejectKeys {
		type Output = Value;

		fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<Value>> {
			let issues: Vec<Issue> = input
				.as_object()
				.into_iter()
				.flat_map(|map| map.keys())
				.map(|key| Issue::new("rejected").at([PathSegment::from(key.as_str())]))
				.collect();
			if issues.is_empty() {
				Outcome::Success(input.clone()).into()
			} else {
				Outcome::Failure(issues).into()
			}
		}
	}

	#[fixture]
	fn event() -> RequestEvent {
		RequestEvent::synthetic()
	}

	#[rstest]
	#[tokio::test]
	async fn test_success_passes_output_through(event: RequestEvent) {
		let result = schema(RejectKeys).validate(&event, json!({})).await;

		assert_eq!(result, ValidationResult::success(json!({})));
	}

	#[rstest]
	#[tokio::test]
	async fn test_failure_status_override(event: RequestEvent) {
		// Arrange
		let validator = schema(RejectKeys).with_failure_status(422);

		// Act
		let result = validator.validate(&event, json!({"a": 1})).await;

		// Assert
		assert_eq!(result.status(), Some(422));
		assert_eq!(result.error().unwrap().field("a"), ["rejected"]);
	}

	#[cfg(debug_assertions)]
	#[rstest]
	#[should_panic(expected = "failure status must be 4xx, got 200")]
	fn test_failure_status_outside_4xx_rejected() {
		let _ = schema(RejectKeys).with_failure_status(200);
	}

	#[rstest]
	#[tokio::test]
	async fn test_failure_status_from_settings(event: RequestEvent) {
		let settings = Settings::from_toml_str("[validation]\nfailure_status = 422\n").unwrap();
		let validator = schema(RejectKeys).with_settings(&settings);

		let result = validator.validate(&event, json!({"a": 1})).await;

		assert_eq!(validator.failure_status(), 422);
		assert_eq!(result.status(), Some(422));
	}

	#[rstest]
	#[tokio::test]
	async fn test_validator_fn_sees_request(event: RequestEvent) {
		// Arrange
		let validator = validator_fn(|event: RequestEvent, input: Value| async move {
			if event.header("x-csrf-token").is_some() {
				ValidationResult::success(input)
			} else {
				ValidationResult::failure(ValidatorErrors {
					form_errors: vec!["Missing CSRF token".into()],
					..Default::default()
				})
			}
		});
		let with_token = RequestEvent::builder()
			.uri("/login")
			.header("x-csrf-token", "abc")
			.build()
			.unwrap();

		// Act
		let accepted = validator.validate(&with_token, json!({"a": 1})).await;
		let rejected = validator.validate(&event, json!({"a": 1})).await;

		// Assert
		assert_eq!(accepted.data(), Some(&json!({"a": 1})));
		assert_eq!(
			rejected.error().unwrap().form_errors,
			vec!["Missing CSRF token"]
		);
	}

	#[rstest]
	fn test_validators_are_object_safe() {
		let validators: Vec<Box<dyn DataValidator<Output = Value>>> = vec![
			Box::new(schema(RejectKeys)),
			Box::new(validator_fn(|_: RequestEvent, input: Value| async move {
				ValidationResult::success(input)
			})),
		];

		assert_eq!(validators.len(), 2);
	}
}
