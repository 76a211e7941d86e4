//! Pack configuration: the `Pack Info` section plus one section per unreleased track.
//!
//! Loaded once at startup with [`PackConfig::load`] and passed by reference to
//! whatever builds the pack descriptor.

use std::path::Path;

use trackdb_primitives::Sha1;

use crate::ini::{Section, SectionedDocument};
use crate::{ConfigError, Result};

/// Name of the section holding pack metadata and track lists.
pub const PACK_INFO_SECTION: &str = "Pack Info";

/// A track stub that is not in the public database yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreleasedTrackConfig {
	/// Taken from the section name.
	pub hash: Sha1,
	pub slot_id: u32,
	pub kind: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
	pub name: String,
	pub author: String,
	pub description: String,
	pub race: Vec<Sha1>,
	pub coin: Vec<Sha1>,
	pub balloon: Vec<Sha1>,
	pub unreleased: Vec<UnreleasedTrackConfig>,
}

impl PackConfig {
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	pub fn parse(input: &str) -> Result<Self> {
		let doc = SectionedDocument::parse(input)?;
		let info = doc.require_section(PACK_INFO_SECTION)?;

		let unreleased = doc
			.sections()
			.filter(|s| s.name != PACK_INFO_SECTION)
			.map(parse_unreleased)
			.collect::<Result<_>>()?;

		Ok(Self {
			name: info.require("name")?.to_owned(),
			author: info.require("author")?.to_owned(),
			description: info.require("description")?.to_owned(),
			race: parse_hash_list(info, "race")?,
			coin: parse_hash_list(info, "coin")?,
			balloon: parse_hash_list(info, "balloon")?,
			unreleased,
		})
	}
}

/// Comma-separated hashes. Lists are usually written with a trailing comma,
/// so empty items are skipped.
fn parse_hash_list(section: &Section, key: &str) -> Result<Vec<Sha1>> {
	section
		.require(key)?
		.split(',')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(|item| parse_hash(section, item))
		.collect()
}

fn parse_unreleased(section: &Section) -> Result<UnreleasedTrackConfig> {
	Ok(UnreleasedTrackConfig {
		hash: parse_hash(section, section.name.trim())?,
		slot_id: section.require_u32("slot")?,
		kind: section.require_u32("type")?,
	})
}

fn parse_hash(section: &Section, text: &str) -> Result<Sha1> {
	text.parse().map_err(|error| ConfigError::InvalidHash {
		section: section.name.clone(),
		error,
	})
}
