//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;
use trackdb_primitives::Sha1Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A pack config line is neither a section header, an assignment, nor a comment.
	#[error("line {line}: {message}")]
	Syntax {
		/// 1-based line number.
		line: usize,
		message: String,
	},

	/// The same section header appears twice.
	#[error("duplicate section [{0}]")]
	DuplicateSection(String),

	/// The same key appears twice within one section.
	#[error("duplicate key '{key}' in [{section}]")]
	DuplicateKey { section: String, key: String },

	/// A required section is missing.
	#[error("missing section [{0}]")]
	MissingSection(String),

	/// A required key is missing from a section.
	#[error("missing key '{key}' in [{section}]")]
	MissingField { section: String, key: String },

	/// A value that must be an integer is not.
	#[error("'{key}' in [{section}] is not an integer: '{value}'")]
	InvalidInteger {
		section: String,
		key: String,
		value: String,
	},

	/// A track hash is not 40 hex digits.
	#[error("bad track hash in [{section}]: {error}")]
	InvalidHash {
		section: String,
		#[source]
		error: Sha1Error,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
