//! Core types shared by Courier server functions and validators
//!
//! This crate provides the pieces that sit at the boundary between the
//! transport layer and application code:
//!
//! - [`RequestEvent`]: request-scoped data handed to every server function
//! - [`AbortSignal`]: cooperative cancellation observed by handlers
//! - [`ContextFactory`]: how a proxy obtains the event for a call
//! - [`Settings`]: TOML-backed configuration
//! - [`logging`]: `tracing` subscriber installation
//!
//! ## Example
//!
//! ```
//! use courier_core::{AmbientContext, ContextFactory, RequestEvent, scope_request_event};
//! use http::Method;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let event = RequestEvent::builder()
//!     .method(Method::POST)
//!     .uri("/api/login")
//!     .build()
//!     .unwrap();
//!
//! let seen = scope_request_event(event.clone(), async {
//!     AmbientContext.request_event()
//! })
//! .await;
//!
//! assert!(seen.same_request(&event));
//! # }
//! ```

pub mod context;
pub mod event;
pub mod logging;
pub mod scope;
pub mod settings;
pub mod signal;

pub use context::{
	AmbientContext, ContextFactory, FixedContext, current_request_event, scope_request_event,
};
pub use event::{EventError, RequestEvent, RequestEventBuilder};
pub use logging::{LogFormat, LoggingError, init_logging};
pub use scope::RequestScope;
pub use settings::{
	LoggingSettings, ServerFnSettings, Settings, SettingsError, ValidationSettings,
};
pub use signal::{AbortSignal, Aborted};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::context::*;
	pub use crate::event::*;
	pub use crate::scope::*;
	pub use crate::settings::*;
	pub use crate::signal::*;
}
