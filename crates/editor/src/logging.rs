//! Tracing setup.

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// `EnvFilter` directives used when `RUST_LOG` is not set.
	pub filter: String,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_owned(),
		}
	}
}

#[derive(Error, Debug)]
pub enum LoggingError {
	#[error("invalid log filter: {0}")]
	Filter(#[from] ParseError),
}

/// Installs a stderr subscriber as the global default.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// without touching anything when a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<bool, LoggingError> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(&config.filter)?,
	};

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.try_init()
		.is_ok();

	if installed {
		tracing::debug!(filter = %config.filter, "Tracing initialized");
	}
	Ok(installed)
}
