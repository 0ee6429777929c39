//! Error type for server function handlers
//!
//! The proxy propagates whatever error a handler returns. Handlers that have
//! no error type of their own can use [`ServerFnError`].

use courier_core::Aborted;
use serde::{Deserialize, Serialize};

/// Common error type for server function handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ServerFnError {
	/// The caller's abort signal fired before the handler finished
	#[error("Server function aborted")]
	Aborted,

	/// Error carrying an HTTP status for the transport
	#[error("Server error ({status}): {message}")]
	Server {
		/// HTTP status code
		status: u16,
		/// Error message
		message: String,
	},

	/// Application error raised by the handler body
	#[error("Application error: {0}")]
	Application(String),
}

impl ServerFnError {
	pub fn server(status: u16, message: impl Into<String>) -> Self {
		Self::Server {
			status,
			message: message.into(),
		}
	}

	pub fn application(msg: impl Into<String>) -> Self {
		Self::Application(msg.into())
	}

	/// HTTP status a transport should answer with.
	///
	/// `Aborted` maps to 499 (client closed request).
	pub fn status(&self) -> u16 {
		match self {
			Self::Aborted => 499,
			Self::Server { status, .. } => *status,
			Self::Application(_) => 500,
		}
	}
}

impl From<Aborted> for ServerFnError {
	fn from(_: Aborted) -> Self {
		Self::Aborted
	}
}
