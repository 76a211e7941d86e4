//! Track/alias consolidation pipeline.
//!
//! Reads community-maintained `|`-delimited track exports and produces a
//! deterministic binary track catalog plus an alias table:
//!
//! ```text
//! source ─▶ record ─▶ assemble ─┬─▶ index ─▶ alias ─┐
//!                               └──── filter ───────┴─▶ emit
//! ```
//!
//! - [`source`]: lazy line readers with fixed header skipping.
//! - [`record`]: strict decoders for 16-field track and 6-field reference lines.
//! - [`index`]: external id → canonical hash/slot join table.
//! - [`alias`]: reference source × index → [`AliasEntry`] list.
//! - [`assemble`]: merges sources and builds the [`Catalog`].
//! - [`emit`]: single-file or sharded blob output.
//! - [`pack`]: pack descriptors built from a [`trackdb_config::PackConfig`].

pub mod alias;
pub mod assemble;
pub mod blob;
pub mod catalog;
pub mod emit;
pub mod error;
pub mod index;
pub mod pack;
pub mod record;
pub mod source;

use std::path::PathBuf;

use trackdb_config::{OutputMode, PipelineConfig};
pub use trackdb_primitives::{AliasEntry, Sha1, Track};

pub use crate::assemble::{AssembleWarning, Assembled, CatalogAssembler};
pub use crate::catalog::Catalog;
pub use crate::emit::EmitSummary;
pub use crate::error::{BlobError, CatalogError, RecordError, Result};
pub use crate::pack::{Pack, build_pack};

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
	pub summary: EmitSummary,
	pub warnings: Vec<AssembleWarning>,
	/// The catalog file (single mode) or output directory (sharded mode).
	pub destination: PathBuf,
}

/// Assembles the catalog described by `config` and writes it out.
///
/// Nothing is written unless assembly succeeds.
pub fn run(config: &PipelineConfig) -> Result<BuildReport> {
	let Assembled { catalog, warnings } = CatalogAssembler::from_config(config).assemble()?;

	let output = &config.output;
	let (summary, destination) = match output.mode {
		OutputMode::Single => {
			let path = output.dir.join(&output.catalog);
			(emit::write_catalog(&catalog, &path)?, path)
		}
		OutputMode::Sharded => (emit::write_sharded(&catalog, &output.dir)?, output.dir.clone()),
	};

	Ok(BuildReport {
		summary,
		warnings,
		destination,
	})
}
