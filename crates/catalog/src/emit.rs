//! Writes an assembled [`Catalog`] to disk.
//!
//! Two layouts are supported:
//!
//! - **single**: one blob holding the whole [`Catalog`].
//! - **sharded**: `tracks/<hex hash>.bin` per track plus `alias.bin` with the
//!   alias table, all under one output directory.
//!
//! Every file is written atomically.

use std::fmt;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use trackdb_primitives::Sha1;

use crate::blob::write_blob;
use crate::catalog::Catalog;
use crate::{CatalogError, Result};

/// Subdirectory of a sharded output holding one file per track.
pub const TRACKS_DIR: &str = "tracks";
/// File name of the alias table in a sharded output.
pub const ALIAS_FILE: &str = "alias.bin";
/// Extension of every emitted blob.
pub const BLOB_EXTENSION: &str = "bin";

/// Counts reported after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
	pub tracks: usize,
	pub aliases: usize,
}

impl fmt::Display for EmitSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} tracks and {} aliases", self.tracks, self.aliases)
	}
}

fn create_dir(dir: &Path) -> Result<()> {
	std::fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))
}

/// Path of a track's shard file under `dir`.
pub fn shard_path(dir: &Path, hash: &Sha1) -> PathBuf {
	dir.join(TRACKS_DIR).join(format!("{}.{BLOB_EXTENSION}", hash.to_hex()))
}

/// Writes the whole catalog as one blob at `path`.
pub fn write_catalog(catalog: &Catalog, path: &Path) -> Result<EmitSummary> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		create_dir(parent)?;
	}
	write_blob(path, catalog)?;

	let summary = EmitSummary {
		tracks: catalog.tracks.len(),
		aliases: catalog.aliases.len(),
	};
	tracing::info!(path = %path.display(), %summary, "wrote catalog");
	Ok(summary)
}

/// Deletes `*.bin` files under `tracks_dir` that no track in `catalog` owns.
fn remove_stale_shards(tracks_dir: &Path, catalog: &Catalog) -> Result<usize> {
	let owned: FxHashSet<String> = catalog
		.tracks
		.iter()
		.map(|track| format!("{}.{BLOB_EXTENSION}", track.identity_hash.to_hex()))
		.collect();

	let mut removed = 0;
	for entry in std::fs::read_dir(tracks_dir).map_err(|e| CatalogError::io(tracks_dir, e))? {
		let path = entry.map_err(|e| CatalogError::io(tracks_dir, e))?.path();
		if path.extension().is_none_or(|ext| ext != BLOB_EXTENSION) {
			continue;
		}
		if path.file_name().and_then(|n| n.to_str()).is_some_and(|n| owned.contains(n)) {
			continue;
		}
		std::fs::remove_file(&path).map_err(|e| CatalogError::io(&path, e))?;
		removed += 1;
	}
	Ok(removed)
}

/// Writes one blob per track plus the alias table under `dir`.
///
/// Existing directories are reused and existing shard files are replaced.
/// Shards left over from earlier runs are deleted, so `tracks/` always holds
/// exactly the tracks in `catalog`.
pub fn write_sharded(catalog: &Catalog, dir: &Path) -> Result<EmitSummary> {
	let tracks_dir = dir.join(TRACKS_DIR);
	create_dir(&tracks_dir)?;

	for track in &catalog.tracks {
		write_blob(&shard_path(dir, &track.identity_hash), track)?;
	}
	let stale = remove_stale_shards(&tracks_dir, catalog)?;
	tracing::debug!(dir = %dir.display(), tracks = catalog.tracks.len(), stale, "wrote track shards");

	write_blob(&dir.join(ALIAS_FILE), &catalog.aliases)?;

	let summary = EmitSummary {
		tracks: catalog.tracks.len(),
		aliases: catalog.aliases.len(),
	};
	tracing::info!(dir = %dir.display(), %summary, "wrote sharded catalog");
	Ok(summary)
}

#[cfg(test)]
mod tests;
