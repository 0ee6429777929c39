//! Request context, cancellation, settings and logging.
//!
//! # Examples
//!
//! ```
//! use courier::core::{LogFormat, Settings};
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [logging]
//!     level = "courier=debug"
//!     format = "json"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.logging.format, LogFormat::Json);
//! assert_eq!(settings.validation.failure_status, 400);
//! ```

pub use courier_core::*;
