//! Server function proxies.
//!
//! # Examples
//!
//! ```
//! use courier::server_fn::{AbortSignal, RequestEvent, ServerFn, ServerFnError};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let watch = ServerFn::new(|event: RequestEvent| async move {
//!     Ok::<_, ServerFnError>(event.signal().is_some())
//! });
//!
//! assert_eq!(watch.call(()).await, Ok(false));
//! assert_eq!(watch.call_with_signal(AbortSignal::new(), ()).await, Ok(true));
//! # }
//! ```

pub use courier_server_fn::*;
