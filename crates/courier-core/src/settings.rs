//! Courier settings
//!
//! Settings are plain serde structures loaded from TOML. Every field has a
//! default, so an empty document is a valid configuration.
//!
//! ```toml
//! [server_fn]
//! endpoint_prefix = "/api/server_fn"
//!
//! [validation]
//! failure_status = 422
//!
//! [logging]
//! level = "courier=debug,info"
//! format = "json"
//! ```

use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("failed to read settings file {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid setting `{key}`: {reason}")]
	Invalid { key: &'static str, reason: String },
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub server_fn: ServerFnSettings,
	pub validation: ValidationSettings,
	pub logging: LoggingSettings,
}

/// Server function naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerFnSettings {
	/// Prefix of every server function endpoint, without a trailing slash.
	pub endpoint_prefix: String,
}

impl Default for ServerFnSettings {
	fn default() -> Self {
		Self {
			endpoint_prefix: "/api/server_fn".to_string(),
		}
	}
}

/// Schema validation behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
	/// HTTP status reported with a failed validation. Must be 4xx.
	pub failure_status: u16,
}

impl Default for ValidationSettings {
	fn default() -> Self {
		Self {
			failure_status: 400,
		}
	}
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	/// `EnvFilter` directive, e.g. `"info"` or `"courier_server_fn=debug,warn"`.
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
		}
	}
}

impl Settings {
	/// Parses and validates settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use courier_core::Settings;
	///
	/// let settings = Settings::from_toml_str("[validation]\nfailure_status = 422\n").unwrap();
	/// assert_eq!(settings.validation.failure_status, 422);
	/// assert_eq!(settings.server_fn.endpoint_prefix, "/api/server_fn");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let settings: Settings = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.display().to_string(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Checks invariants that serde cannot express.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !(400..500).contains(&self.validation.failure_status) {
			return Err(SettingsError::Invalid {
				key: "validation.failure_status",
				reason: format!(
					"expected a 4xx status code, got {}",
					self.validation.failure_status
				),
			});
		}
		if !self.server_fn.endpoint_prefix.starts_with('/') {
			return Err(SettingsError::Invalid {
				key: "server_fn.endpoint_prefix",
				reason: "must start with '/'".to_string(),
			});
		}
		Ok(())
	}
}
