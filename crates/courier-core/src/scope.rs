//! Typed per-request storage

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Values shared between the transport and the handlers of one request,
/// keyed by type.
///
/// Cloning a `RequestScope` yields a handle to the same storage.
#[derive(Clone)]
pub struct RequestScope {
	values: Arc<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>,
}

impl RequestScope {
	/// Creates an empty scope.
	///
	/// # Examples
	///
	/// ```
	/// use courier_core::RequestScope;
	///
	/// let scope = RequestScope::new();
	/// assert!(!scope.contains::<u32>());
	/// ```
	pub fn new() -> Self {
		Self {
			values: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Retrieves the value of type `T`, if one was stored.
	///
	/// # Examples
	///
	/// ```
	/// use courier_core::RequestScope;
	///
	/// let scope = RequestScope::new();
	/// scope.set(42i32);
	///
	/// assert_eq!(*scope.get::<i32>().unwrap(), 42);
	/// assert!(scope.get::<String>().is_none());
	/// ```
	pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
		values
			.get(&TypeId::of::<T>())
			.and_then(|value| value.clone().downcast::<T>().ok())
	}

	/// Stores a value, replacing any previous value of the same type.
	pub fn set<T: Any + Send + Sync>(&self, value: T) {
		self.set_arc(Arc::new(value));
	}

	/// Stores an already shared value.
	pub fn set_arc<T: Any + Send + Sync>(&self, value: Arc<T>) {
		let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
		values.insert(TypeId::of::<T>(), value);
	}

	/// Returns `true` if a value of type `T` is present.
	pub fn contains<T: Any + Send + Sync>(&self) -> bool {
		let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
		values.contains_key(&TypeId::of::<T>())
	}

	/// Removes and returns the value of type `T`.
	pub fn remove<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
		values
			.remove(&TypeId::of::<T>())
			.and_then(|value| value.downcast::<T>().ok())
	}

	/// Number of stored values.
	pub fn len(&self) -> usize {
		self.values
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for RequestScope {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for RequestScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RequestScope")
			.field("len", &self.len())
			.finish()
	}
}
