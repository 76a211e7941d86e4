//! Error types for the catalog pipeline.

use std::path::PathBuf;

use thiserror::Error;
use trackdb_config::ConfigError;
use trackdb_primitives::Sha1Error;

/// A single delimited line could not be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
	/// The line does not have the fixed number of `|`-separated fields.
	#[error("expected {expected} fields, found {found}")]
	FieldCount { expected: usize, found: usize },

	/// A numeric field is not a base-10 integer.
	#[error("field '{field}' is not an integer: '{value}'")]
	InvalidInteger { field: &'static str, value: String },

	/// The identity hash field is not 40 hex digits.
	#[error(transparent)]
	InvalidHash(#[from] Sha1Error),
}

/// Why a stored blob could not be read back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobError {
	/// Fewer bytes than the fixed header.
	#[error("{0} bytes is shorter than the blob header")]
	Truncated(usize),
	/// The leading bytes are not the catalog magic.
	#[error("bad magic bytes")]
	Magic,
	/// Written by a different schema version.
	#[error("schema version {found}, expected {expected}")]
	Version { found: u32, expected: u32 },
	/// The header is fine but the payload does not decode.
	#[error("undecodable payload: {0}")]
	Payload(String),
}

/// Errors that abort a catalog run.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// A source file does not exist.
	///
	/// Fatal for the primary and alias sources; the assembler downgrades it
	/// to a warning for the supplemental source.
	#[error("source not found: {}", path.display())]
	SourceNotFound { path: PathBuf },

	/// Reading or writing a file failed.
	#[error("I/O error on {}: {error}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},

	/// A line in a source could not be decoded.
	#[error("{}:{line}: malformed record: {error}", path.display())]
	MalformedRecord {
		path: PathBuf,
		/// 1-based line number within the file.
		line: usize,
		#[source]
		error: RecordError,
	},

	/// An alias reference line points at an external id no track carries.
	#[error("{}:{line}: unknown external id {external_id}", path.display())]
	UnknownExternalId {
		external_id: u32,
		path: PathBuf,
		line: usize,
	},

	/// Serializing a blob payload failed.
	#[error("failed to encode blob: {0}")]
	Encode(#[source] postcard::Error),

	/// A blob has a bad header or an undecodable payload.
	#[error("invalid blob: {0}")]
	InvalidBlob(#[from] BlobError),

	/// Loading configuration failed.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl CatalogError {
	pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			error,
		}
	}

	pub fn is_source_not_found(&self) -> bool {
		matches!(self, Self::SourceNotFound { .. })
	}
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
