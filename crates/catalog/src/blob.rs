//! Versioned binary blobs.
//!
//! Every artifact is laid out as:
//!
//! ```text
//! MAGIC (8 bytes) | SCHEMA_VERSION (u32 LE) | postcard payload
//! ```
//!
//! Payloads hold only `Vec`s and plain structs, so identical input always
//! encodes to identical bytes.

use std::io::Write;
use std::mem::size_of;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::BlobError;
use crate::{CatalogError, Result};

/// Magic bytes identifying a track catalog blob.
pub const MAGIC: &[u8; 8] = b"TRACKDB\0";

/// Schema version for blob format compatibility.
pub const SCHEMA_VERSION: u32 = 1;

/// Total header size in bytes (magic + version).
pub const HEADER_SIZE: usize = MAGIC.len() + size_of::<u32>();

pub fn encode_blob<T: Serialize>(value: &T) -> Result<Vec<u8>> {
	let payload = postcard::to_stdvec(value).map_err(CatalogError::Encode)?;
	let mut data = Vec::with_capacity(HEADER_SIZE + payload.len());
	data.extend_from_slice(MAGIC);
	data.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
	data.extend_from_slice(&payload);
	Ok(data)
}

/// Checks the header and returns the payload that follows it.
pub fn blob_payload(data: &[u8]) -> std::result::Result<&[u8], BlobError> {
	let (header, payload) = data.split_at_checked(HEADER_SIZE).ok_or(BlobError::Truncated(data.len()))?;
	let (magic, version) = header.split_at(MAGIC.len());
	if magic != MAGIC {
		return Err(BlobError::Magic);
	}

	let mut version_bytes = [0_u8; size_of::<u32>()];
	version_bytes.copy_from_slice(version);
	let found = u32::from_le_bytes(version_bytes);
	if found != SCHEMA_VERSION {
		return Err(BlobError::Version {
			found,
			expected: SCHEMA_VERSION,
		});
	}
	Ok(payload)
}

pub fn decode_blob<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
	let payload = blob_payload(data)?;
	Ok(postcard::from_bytes(payload).map_err(|e| BlobError::Payload(e.to_string()))?)
}

pub fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let data = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
	decode_blob(&data)
}

/// Writes `data` to `path` via a temp file in the same directory, so readers
/// never observe a partially written file.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CatalogError::io(dir, e))?;
	tmp.write_all(data).map_err(|e| CatalogError::io(tmp.path(), e))?;
	tmp.as_file().sync_all().map_err(|e| CatalogError::io(tmp.path(), e))?;
	tmp.persist(path).map_err(|e| CatalogError::io(path, e.error))?;
	Ok(())
}

pub fn write_blob<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	write_atomic(path, &encode_blob(value)?)
}
