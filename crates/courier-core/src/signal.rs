//! Cooperative cancellation for server function calls

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Returned by [`AbortSignal::run_until_aborted`] when the signal fired first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation aborted")]
pub struct Aborted;

/// Cancellation signal passed by a caller to a server function.
///
/// The proxy never acts on the signal itself; handlers read it from
/// [`RequestEvent::signal`](crate::RequestEvent::signal) and decide how to
/// stop their own work.
///
/// # Examples
///
/// ```
/// use courier_core::AbortSignal;
///
/// let signal = AbortSignal::new();
/// let observer = signal.clone();
///
/// signal.abort();
/// assert!(observer.is_aborted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
	token: CancellationToken,
}

impl AbortSignal {
	pub fn new() -> Self {
		Self::default()
	}

	/// The underlying token, for use with `tokio::select!` or other
	/// `tokio-util` aware code.
	pub fn token(&self) -> &CancellationToken {
		&self.token
	}

	/// Requests cancellation. Every clone and child observes it.
	pub fn abort(&self) {
		self.token.cancel();
	}

	pub fn is_aborted(&self) -> bool {
		self.token.is_cancelled()
	}

	/// Completes once the signal has been aborted.
	pub async fn aborted(&self) {
		self.token.cancelled().await
	}

	/// Creates a signal that is aborted together with this one but can also
	/// be aborted on its own.
	pub fn child(&self) -> Self {
		Self {
			token: self.token.child_token(),
		}
	}

	/// Drives `future` to completion unless the signal fires first.
	///
	/// # Examples
	///
	/// ```
	/// use courier_core::{AbortSignal, Aborted};
	///
	/// # #[tokio::main(flavor = "current_thread")]
	/// # async fn main() {
	/// let signal = AbortSignal::new();
	/// assert_eq!(signal.run_until_aborted(async { 5 }).await, Ok(5));
	///
	/// signal.abort();
	/// let pending = std::future::pending::<()>();
	/// assert_eq!(signal.run_until_aborted(pending).await, Err(Aborted));
	/// # }
	/// ```
	pub async fn run_until_aborted<F>(&self, future: F) -> Result<F::Output, Aborted>
	where
		F: Future,
	{
		tokio::select! {
			biased;
			_ = self.token.cancelled() => Err(Aborted),
			output = future => Ok(output),
		}
	}
}

impl From<CancellationToken> for AbortSignal {
	fn from(token: CancellationToken) -> Self {
		Self { token }
	}
}
