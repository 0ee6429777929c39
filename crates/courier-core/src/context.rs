//! Where a server function call gets its [`RequestEvent`] from
//!
//! The transport installs the event of the request being served with
//! [`scope_request_event`]. Proxies ask a [`ContextFactory`] for the event at
//! call time; the default [`AmbientContext`] reads the task-local value and
//! synthesizes an event when none is installed.

use crate::event::RequestEvent;
use std::future::Future;

tokio::task_local! {
	/// Event of the request currently being served on this task.
	static CURRENT_EVENT: RequestEvent;
}

/// Runs `future` with `event` installed as the current request.
///
/// Nested scopes shadow the outer one for their duration.
pub async fn scope_request_event<F>(event: RequestEvent, future: F) -> F::Output
where
	F: Future,
{
	CURRENT_EVENT.scope(event, future).await
}

/// The event installed by the innermost enclosing [`scope_request_event`].
pub fn current_request_event() -> Option<RequestEvent> {
	CURRENT_EVENT.try_with(RequestEvent::clone).ok()
}

/// Produces the context injected as a handler's first argument.
pub trait ContextFactory: Send + Sync {
	fn request_event(&self) -> RequestEvent;
}

/// Uses the task-local request when present, otherwise a synthetic event.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbientContext;

impl ContextFactory for AmbientContext {
	fn request_event(&self) -> RequestEvent {
		match current_request_event() {
			Some(event) => event,
			None => {
				tracing::trace!("no request in scope; synthesizing request event");
				RequestEvent::synthetic()
			}
		}
	}
}

/// Always returns the same event. Mostly useful in tests and for background
/// jobs that run on behalf of one request.
#[derive(Debug, Clone)]
pub struct FixedContext {
	event: RequestEvent,
}

impl FixedContext {
	pub fn new(event: RequestEvent) -> Self {
		Self { event }
	}
}

impl ContextFactory for FixedContext {
	fn request_event(&self) -> RequestEvent {
		self.event.clone()
	}
}

impl<F> ContextFactory for F
where
	F: Fn() -> RequestEvent + Send + Sync,
{
	fn request_event(&self) -> RequestEvent {
		self()
	}
}
