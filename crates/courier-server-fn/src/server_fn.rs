//! The server function proxy

use crate::handler::Handler;
use courier_core::{AbortSignal, AmbientContext, ContextFactory, ServerFnSettings};
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::Instrument;

/// Callable proxy around a server function [`Handler`].
///
/// Created once per handler and reused for every call. Each call asks the
/// context factory for the current [`RequestEvent`](courier_core::RequestEvent)
/// and passes it to the handler ahead of the caller's arguments.
pub struct ServerFn<H, Args> {
	name: Cow<'static, str>,
	endpoint_prefix: Cow<'static, str>,
	handler: Arc<H>,
	context: Arc<dyn ContextFactory>,
	_args: PhantomData<fn(Args)>,
}

impl<H, Args, T, E> ServerFn<H, Args>
where
	H: Handler<Args, Output = Result<T, E>>,
	T: Send + 'static,
	E: fmt::Display + Send + 'static,
{
	/// Wraps `handler`, named after its function and reading the request
	/// from [`AmbientContext`].
	///
	/// The handler must resolve to a `Result`; a plain value is rejected:
	///
	/// ```compile_fail
	/// use courier_core::RequestEvent;
	/// use courier_server_fn::ServerFn;
	///
	/// let greet = ServerFn::new(|_event: RequestEvent| async { "hello" });
	/// ```
	pub fn new(handler: H) -> Self {
		Self {
			name: Cow::Borrowed(default_name::<H>()),
			endpoint_prefix: Cow::Borrowed("/api/server_fn"),
			handler: Arc::new(handler),
			context: Arc::new(AmbientContext),
			_args: PhantomData,
		}
	}

	/// Overrides the function name used in logs and in [`endpoint`](Self::endpoint).
	pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
		self.name = name.into();
		self
	}

	/// Replaces the factory that supplies the handler's request event.
	pub fn with_context<C>(mut self, context: C) -> Self
	where
		C: ContextFactory + 'static,
	{
		self.context = Arc::new(context);
		self
	}

	/// Applies the `[server_fn]` settings section.
	pub fn with_settings(mut self, settings: &ServerFnSettings) -> Self {
		self.endpoint_prefix = Cow::Owned(settings.endpoint_prefix.clone());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Path under which a transport exposes this function.
	///
	/// # Examples
	///
	/// ```
	/// use courier_core::RequestEvent;
	/// use courier_server_fn::ServerFn;
	///
	/// async fn list_todos(_event: RequestEvent) -> Result<Vec<String>, std::convert::Infallible> {
	///     Ok(Vec::new())
	/// }
	///
	/// let list = ServerFn::new(list_todos);
	/// assert_eq!(list.name(), "list_todos");
	/// assert_eq!(list.endpoint(), "/api/server_fn/list_todos");
	/// ```
	pub fn endpoint(&self) -> String {
		format!("{}/{}", self.endpoint_prefix.trim_end_matches('/'), self.name)
	}

	/// Invokes the handler with `args`.
	pub fn call(
		&self,
		args: Args,
	) -> impl Future<Output = Result<T, E>> + Send + 'static + use<H, Args, T, E> {
		self.invoke(None, args)
	}

	/// Invokes the handler with `args`, exposing `signal` to it through
	/// [`RequestEvent::signal`](courier_core::RequestEvent::signal).
	pub fn call_with_signal(
		&self,
		signal: AbortSignal,
		args: Args,
	) -> impl Future<Output = Result<T, E>> + Send + 'static + use<H, Args, T, E> {
		self.invoke(Some(signal), args)
	}

	fn invoke(
		&self,
		signal: Option<AbortSignal>,
		args: Args,
	) -> impl Future<Output = Result<T, E>> + Send + 'static + use<H, Args, T, E> {
		let mut event = self.context.request_event();
		if let Some(signal) = signal {
			event = event.with_signal(signal);
		}

		let span = tracing::debug_span!(
			"server_fn",
			name = %self.name,
			request_id = %event.id(),
			signal = event.signal().is_some()
		);
		let pending = self.handler.call(event, args);

		async move {
			tracing::debug!("invoking server function");
			let result = pending.await;
			match &result {
				Ok(_) => tracing::debug!("server function completed"),
				Err(error) => tracing::warn!(%error, "server function returned an error"),
			}
			result
		}
		.instrument(span)
	}
}

impl<H, Args> Clone for ServerFn<H, Args> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			endpoint_prefix: self.endpoint_prefix.clone(),
			handler: Arc::clone(&self.handler),
			context: Arc::clone(&self.context),
			_args: PhantomData,
		}
	}
}

impl<H, Args> fmt::Debug for ServerFn<H, Args> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ServerFn")
			.field("name", &self.name)
			.field("endpoint_prefix", &self.endpoint_prefix)
			.finish_non_exhaustive()
	}
}

/// Last named path segment of the handler type, skipping `{{closure}}`.
fn default_name<H>() -> &'static str {
	let full = std::any::type_name::<H>();
	full.rsplit("::")
		.find(|segment| !segment.is_empty() && !segment.starts_with('{'))
		.unwrap_or(full)
}
