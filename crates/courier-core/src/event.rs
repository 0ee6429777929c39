//! Request-scoped context passed to server functions
//!
//! A [`RequestEvent`] is created by the transport for each incoming request
//! (or synthesized when a server function runs outside of one) and handed to
//! the handler as its first argument.

use crate::scope::RequestScope;
use crate::signal::AbortSignal;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, Uri};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Errors raised while building a [`RequestEvent`].
#[derive(Debug, thiserror::Error)]
pub enum EventError {
	#[error("invalid uri: {0}")]
	InvalidUri(#[from] http::uri::InvalidUri),

	#[error("invalid header name: {0}")]
	InvalidHeaderName(#[from] http::header::InvalidHeaderName),

	#[error("invalid header value for `{name}`")]
	InvalidHeaderValue { name: String },
}

struct RequestData {
	id: Uuid,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	params: HashMap<String, String>,
	scope: RequestScope,
	synthetic: bool,
}

/// Request context handed to a server function.
///
/// Cloning is cheap; clones refer to the same request. The optional
/// [`AbortSignal`] belongs to a single call and is attached by the proxy.
#[derive(Clone)]
pub struct RequestEvent {
	data: Arc<RequestData>,
	signal: Option<AbortSignal>,
}

impl RequestEvent {
	/// Starts building an event for a real request.
	///
	/// # Examples
	///
	/// ```
	/// use courier_core::RequestEvent;
	/// use http::Method;
	///
	/// let event = RequestEvent::builder()
	///     .method(Method::POST)
	///     .uri("/api/users?page=2")
	///     .header("x-tenant", "acme")
	///     .param("id", "42")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(event.path(), "/api/users");
	/// assert_eq!(event.query(), Some("page=2"));
	/// assert_eq!(event.header("x-tenant"), Some("acme"));
	/// assert_eq!(event.param("id"), Some("42"));
	/// ```
	pub fn builder() -> RequestEventBuilder {
		RequestEventBuilder::new()
	}

	/// An event that does not correspond to any incoming request: `GET /`,
	/// no headers, an empty scope.
	pub fn synthetic() -> Self {
		Self::from_data(RequestData {
			id: Uuid::new_v4(),
			method: Method::GET,
			uri: Uri::from_static("/"),
			headers: HeaderMap::new(),
			params: HashMap::new(),
			scope: RequestScope::new(),
			synthetic: true,
		})
	}

	fn from_data(data: RequestData) -> Self {
		Self {
			data: Arc::new(data),
			signal: None,
		}
	}

	pub fn id(&self) -> Uuid {
		self.data.id
	}

	pub fn method(&self) -> &Method {
		&self.data.method
	}

	pub fn uri(&self) -> &Uri {
		&self.data.uri
	}

	pub fn path(&self) -> &str {
		self.data.uri.path()
	}

	pub fn query(&self) -> Option<&str> {
		self.data.uri.query()
	}

	pub fn headers(&self) -> &HeaderMap {
		&self.data.headers
	}

	/// Header value as a string, if present and valid UTF-8.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.data
			.headers
			.get(name)
			.and_then(|value| value.to_str().ok())
	}

	/// Path parameter extracted by the router.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.data.params.get(name).map(String::as_str)
	}

	pub fn params(&self) -> &HashMap<String, String> {
		&self.data.params
	}

	/// Typed storage shared by everything handling this request.
	pub fn scope(&self) -> &RequestScope {
		&self.data.scope
	}

	/// `true` when the event was synthesized rather than built from a request.
	pub fn is_synthetic(&self) -> bool {
		self.data.synthetic
	}

	/// Cancellation signal supplied by the caller of the current invocation.
	pub fn signal(&self) -> Option<&AbortSignal> {
		self.signal.as_ref()
	}

	/// `true` if a signal was supplied and has fired.
	pub fn is_aborted(&self) -> bool {
		self.signal.as_ref().is_some_and(AbortSignal::is_aborted)
	}

	/// A handle to the same request carrying `signal`.
	pub fn with_signal(&self, signal: AbortSignal) -> Self {
		Self {
			data: Arc::clone(&self.data),
			signal: Some(signal),
		}
	}

	/// `true` if both events describe the same request, regardless of the
	/// signal attached to either.
	pub fn same_request(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.data, &other.data)
	}
}

impl fmt::Debug for RequestEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RequestEvent")
			.field("id", &self.data.id)
			.field("method", &self.data.method)
			.field("uri", &self.data.uri)
			.field("synthetic", &self.data.synthetic)
			.field("signal", &self.signal.is_some())
			.finish()
	}
}

/// Builder for [`RequestEvent`].
///
/// Parsing of the URI and headers is deferred to [`build`](Self::build).
#[derive(Debug)]
pub struct RequestEventBuilder {
	method: Method,
	uri: String,
	headers: Vec<(String, String)>,
	params: HashMap<String, String>,
	scope: RequestScope,
}

impl RequestEventBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			headers: Vec::new(),
			params: HashMap::new(),
			scope: RequestScope::new(),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	/// Appends a header. Repeated names keep every value.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(name.into(), value.into());
		self
	}

	/// Uses a pre-populated scope instead of an empty one.
	pub fn scope(mut self, scope: RequestScope) -> Self {
		self.scope = scope;
		self
	}

	pub fn build(self) -> Result<RequestEvent, EventError> {
		let uri: Uri = self.uri.parse()?;

		let mut headers = HeaderMap::with_capacity(self.headers.len());
		for (name, value) in self.headers {
			let header_name = HeaderName::try_from(name.as_str())?;
			let header_value = HeaderValue::try_from(value.as_str())
				.map_err(|_| EventError::InvalidHeaderValue { name: name.clone() })?;
			headers.append(header_name, header_value);
		}

		Ok(RequestEvent::from_data(RequestData {
			id: Uuid::new_v4(),
			method: self.method,
			uri,
			headers,
			params: self.params,
			scope: self.scope,
			synthetic: false,
		}))
	}
}
