//! Server Functions (RPC)
//!
//! A server function is an async handler whose first parameter is the
//! [`RequestEvent`] of the request being served. Wrapping it in a
//! [`ServerFn`] yields a proxy that application code calls with the remaining
//! arguments only; the proxy obtains the event from its
//! [`ContextFactory`](courier_core::ContextFactory) at call time.
//!
//! A caller may also pass an [`AbortSignal`]. It is not forwarded as an
//! argument; the handler reads it from [`RequestEvent::signal`] and decides
//! how to react. The proxy never aborts anything on its own.
//!
//! ## Example
//!
//! ```
//! use courier_core::{AbortSignal, RequestEvent};
//! use courier_server_fn::{ServerFn, ServerFnError};
//!
//! async fn greet(event: RequestEvent, name: String) -> Result<String, ServerFnError> {
//!     let tenant = event.header("x-tenant").unwrap_or("public");
//!     Ok(format!("hello {} from {}", name, tenant))
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let greet = ServerFn::new(greet);
//!
//! // Plain call: arguments only
//! let text = greet.call(("ada".to_string(),)).await.unwrap();
//! assert_eq!(text, "hello ada from public");
//!
//! // Call with a cancellation signal in front of the arguments
//! let signal = AbortSignal::new();
//! let text = greet.call_with_signal(signal, ("ada".to_string(),)).await.unwrap();
//! assert_eq!(text, "hello ada from public");
//! # }
//! ```
//!
//! ## Handler shapes
//!
//! Any `Fn(RequestEvent, T1, .., Tn) -> impl Future<Output = Result<T, E>>`
//! with up to eight domain arguments is a [`Handler`]. Arguments are passed
//! to the proxy as a tuple.

pub mod error;
pub mod handler;
pub mod server_fn;

pub use courier_core::{AbortSignal, RequestEvent};
pub use error::ServerFnError;
pub use handler::Handler;
pub use server_fn::ServerFn;
