//! `tracing` subscriber installation
//!
//! Courier crates only emit `tracing` events. Applications that do not
//! install their own subscriber can call [`init_logging`] once at startup.

use crate::settings::LoggingSettings;
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Output format of the `fmt` layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Compact,
	Json,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
	#[error("invalid log filter `{directive}`: {source}")]
	Filter {
		directive: String,
		#[source]
		source: tracing_subscriber::filter::ParseError,
	},

	#[error("a global tracing subscriber is already installed")]
	AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Parses the `EnvFilter` directive from `settings`.
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, LoggingError> {
	EnvFilter::try_new(&settings.level).map_err(|source| LoggingError::Filter {
		directive: settings.level.clone(),
		source,
	})
}

/// Installs a global subscriber writing to stderr.
///
/// Fails instead of panicking if a subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), LoggingError> {
	let filter = env_filter(settings)?;

	let layer = match settings.format {
		LogFormat::Pretty => fmt::layer()
			.with_writer(std::io::stderr)
			.with_target(true)
			.boxed(),
		LogFormat::Compact => fmt::layer()
			.with_writer(std::io::stderr)
			.compact()
			.boxed(),
		LogFormat::Json => fmt::layer()
			.with_writer(std::io::stderr)
			.json()
			.boxed(),
	};

	tracing_subscriber::registry()
		.with(layer.with_filter(filter))
		.try_init()?;

	Ok(())
}
