//! Error types for option loading.

use thiserror::Error;

/// Errors raised while loading or saving [`HippieOptions`](crate::HippieOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Malformed TOML, an unknown key, or a value of the wrong type.
	#[error("failed to parse hippie options: {0}")]
	Parse(#[from] toml::de::Error),

	/// Options could not be rendered as TOML.
	#[error("failed to serialize hippie options: {0}")]
	Serialize(#[from] toml::ser::Error),
}

/// Result type for option operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
