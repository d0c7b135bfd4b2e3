//! Editor configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty file is valid;
//! unknown keys are rejected.
//!
//! ```toml
//! max_count = 500
//! history_limit = 50
//! macro_register = "q"
//!
//! [log]
//! filter = "strand_invocation=trace,info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use strand_invocation::Register;
use thiserror::Error;

use crate::logging::LogConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid configuration: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("{0} must be at least 1")]
	Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Upper bound for count prefixes.
	pub max_count: u32,
	/// How many recorded commands are kept for repetition.
	pub history_limit: usize,
	/// How many undo groups each buffer keeps.
	pub undo_limit: usize,
	/// Register macros are recorded into and played from when none is given.
	pub macro_register: Register,
	pub log: LogConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_count: 10_000,
			history_limit: 100,
			undo_limit: 1_000,
			macro_register: Register::MACRO,
			log: LogConfig::default(),
		}
	}
}

impl Config {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_count == 0 {
			return Err(ConfigError::Zero("max_count"));
		}
		if self.history_limit == 0 {
			return Err(ConfigError::Zero("history_limit"));
		}
		if self.undo_limit == 0 {
			return Err(ConfigError::Zero("undo_limit"));
		}
		Ok(())
	}
}
