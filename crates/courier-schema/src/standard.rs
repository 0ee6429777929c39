//! The validation capability every schema exposes

use crate::issue::Issue;
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;

/// Result of a schema's entry point, available now or later.
pub enum MaybeAsync<'a, T> {
	Ready(T),
	Pending(BoxFuture<'a, T>),
}

impl<'a, T> MaybeAsync<'a, T> {
	/// Waits for the value. A ready value never suspends.
	pub async fn resolve(self) -> T {
		match self {
			Self::Ready(value) => value,
			Self::Pending(future) => future.await,
		}
	}

	pub fn is_ready(&self) -> bool {
		matches!(self, Self::Ready(_))
	}
}

impl<T> From<T> for MaybeAsync<'_, T> {
	fn from(value: T) -> Self {
		Self::Ready(value)
	}
}

/// What a schema reports for one input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
	/// Parsed output, including coercions and defaults
	Success(T),
	/// Issues in the order the schema found them
	Failure(Vec<Issue>),
}

impl<T> Outcome<T> {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
		match self {
			Self::Success(value) => Outcome::Success(f(value)),
			Self::Failure(issues) => Outcome::Failure(issues),
		}
	}
}

/// A validator with a single entry point taking raw input.
///
/// Implementations decide whether they answer synchronously
/// ([`MaybeAsync::Ready`]) or need to suspend ([`MaybeAsync::Pending`]).
pub trait StandardSchema: Send + Sync {
	type Output: Send;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<Self::Output>>;
}

impl<S: StandardSchema + ?Sized> StandardSchema for Arc<S> {
	type Output = S::Output;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<Self::Output>> {
		(**self).validate(input)
	}
}

impl<S: StandardSchema + ?Sized> StandardSchema for Box<S> {
	type Output = S::Output;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<Self::Output>> {
		(**self).validate(input)
	}
}
