//! Merges track sources, resolves aliases, and builds the final [`Catalog`].
//!
//! The primary source is mandatory. The supplemental source is optional:
//! when its file is missing the run continues with a primary-only catalog
//! and an [`AssembleWarning`]. Supplemental records equal to one already
//! merged are skipped.
//!
//! The identity index sees the full merged list, including unassigned
//! (slot 0) tracks. Only the emitted track list drops them, and keeps the
//! first track per identity hash.

use std::fmt;
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use trackdb_config::PipelineConfig;
use trackdb_primitives::Track;

use crate::alias::{AliasResolver, ExclusionFlags};
use crate::catalog::Catalog;
use crate::index::IdentityIndex;
use crate::source::{DelimitedSource, ReferenceSource, TrackSource};
use crate::Result;

/// An optional track source and where to fetch it from if it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementalSource {
	pub source: TrackSource,
	pub url: Option<String>,
}

/// Non-fatal conditions met while assembling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleWarning {
	/// The supplemental source file does not exist. Always renders as two
	/// lines: the missing path, then where to fetch it.
	SupplementalMissing { path: PathBuf, url: Option<String> },
}

impl fmt::Display for AssembleWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::SupplementalMissing { path, url } => {
				write!(
					f,
					"could not find {}, output will only include out-of-db tracks!",
					path.display()
				)?;
				match url {
					Some(url) => write!(f, "\nyou can download it from {url}"),
					None => write!(f, "\nno download location is configured for it"),
				}
			}
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
	pub catalog: Catalog,
	pub warnings: Vec<AssembleWarning>,
}

#[derive(Debug, Clone)]
pub struct CatalogAssembler {
	primary: TrackSource,
	supplemental: Option<SupplementalSource>,
	aliases: ReferenceSource,
	exclusion: ExclusionFlags,
}

impl CatalogAssembler {
	pub fn new(primary: TrackSource, aliases: ReferenceSource) -> Self {
		Self {
			primary,
			supplemental: None,
			aliases,
			exclusion: ExclusionFlags::default(),
		}
	}

	pub fn with_supplemental(mut self, supplemental: SupplementalSource) -> Self {
		self.supplemental = Some(supplemental);
		self
	}

	pub fn with_exclusion(mut self, exclusion: ExclusionFlags) -> Self {
		self.exclusion = exclusion;
		self
	}

	pub fn from_config(config: &PipelineConfig) -> Self {
		let max_name_len = config.names.max_len;
		let sources = &config.sources;

		let mut assembler = Self::new(
			TrackSource::new(DelimitedSource::from(&sources.primary), max_name_len),
			ReferenceSource::new(DelimitedSource::from(&sources.aliases)),
		)
		.with_exclusion(ExclusionFlags::new(&config.aliases.exclusion_flags));

		if let Some(supplemental) = &sources.supplemental {
			assembler = assembler.with_supplemental(SupplementalSource {
				source: TrackSource::new(DelimitedSource::from(&supplemental.source()), max_name_len),
				url: supplemental.url.clone(),
			});
		}
		assembler
	}

	/// Reads the primary source, then appends supplemental records that are
	/// not exact duplicates of anything already merged.
	pub fn merge_sources(&self, warnings: &mut Vec<AssembleWarning>) -> Result<Vec<Track>> {
		let mut merged = self.primary.read_all()?;
		tracing::info!(path = %self.primary.path().display(), tracks = merged.len(), "read primary source");

		let Some(supplemental) = &self.supplemental else {
			return Ok(merged);
		};

		let extra = match supplemental.source.read_all() {
			Ok(extra) => extra,
			Err(e) if e.is_source_not_found() => {
				let warning = AssembleWarning::SupplementalMissing {
					path: supplemental.source.path().to_path_buf(),
					url: supplemental.url.clone(),
				};
				for line in warning.to_string().lines() {
					tracing::warn!("{line}");
				}
				warnings.push(warning);
				return Ok(merged);
			}
			Err(e) => return Err(e),
		};

		let mut seen: FxHashSet<Track> = merged.iter().cloned().collect();
		let mut duplicates = 0_usize;
		for track in extra {
			if seen.contains(&track) {
				duplicates += 1;
				continue;
			}
			seen.insert(track.clone());
			merged.push(track);
		}

		tracing::info!(
			path = %supplemental.source.path().display(),
			merged = merged.len(),
			duplicates,
			"merged supplemental source"
		);
		Ok(merged)
	}

	pub fn assemble(&self) -> Result<Assembled> {
		let mut warnings = Vec::new();
		let merged = self.merge_sources(&mut warnings)?;

		let index = IdentityIndex::build(&merged);
		tracing::debug!(external_ids = index.len(), "built identity index");

		let aliases = AliasResolver::new(&index, &self.exclusion).resolve(&self.aliases)?;
		let tracks = emitted_tracks(merged);

		Ok(Assembled {
			catalog: Catalog { tracks, aliases },
			warnings,
		})
	}
}

/// Drops unassigned tracks and later tracks repeating an identity hash.
fn emitted_tracks(merged: Vec<Track>) -> Vec<Track> {
	let total = merged.len();
	let mut seen = FxHashSet::default();
	let mut unassigned = 0_usize;

	let tracks: Vec<Track> = merged
		.into_iter()
		.filter(|track| {
			let keep = track.is_assigned();
			unassigned += usize::from(!keep);
			keep
		})
		.filter(|track| seen.insert(track.identity_hash))
		.collect();

	tracing::debug!(
		total,
		unassigned,
		conflicting = total - unassigned - tracks.len(),
		emitted = tracks.len(),
		"filtered tracks"
	);
	tracks
}
