//! Pack descriptors: named bundles of track hashes built from a [`PackConfig`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use trackdb_config::PackConfig;
use trackdb_primitives::{Sha1, Track};

use crate::Result;
use crate::blob::write_blob;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
	pub name: String,
	pub author_names: String,
	pub description: String,
	pub race_tracks: Vec<Sha1>,
	pub coin_tracks: Vec<Sha1>,
	pub balloon_tracks: Vec<Sha1>,
	/// Stubs for tracks outside the public database. Names are filled in by
	/// the game, so they are empty here, and music always follows the slot.
	pub unreleased_tracks: Vec<Track>,
}

impl Pack {
	pub fn track_count(&self) -> usize {
		self.race_tracks.len() + self.coin_tracks.len() + self.balloon_tracks.len()
	}
}

pub fn build_pack(config: &PackConfig) -> Pack {
	let unreleased_tracks = config
		.unreleased
		.iter()
		.map(|stub| Track {
			identity_hash: stub.hash,
			external_id: None,
			name: String::new(),
			slot_id: stub.slot_id,
			kind: stub.kind,
			music_id: None,
			version: None,
		})
		.collect();

	Pack {
		name: config.name.clone(),
		author_names: config.author.clone(),
		description: config.description.clone(),
		race_tracks: config.race.clone(),
		coin_tracks: config.coin.clone(),
		balloon_tracks: config.balloon.clone(),
		unreleased_tracks,
	}
}

pub fn write_pack(pack: &Pack, path: &Path) -> Result<()> {
	write_blob(path, pack)?;
	tracing::info!(
		path = %path.display(),
		name = %pack.name,
		tracks = pack.track_count(),
		unreleased = pack.unreleased_tracks.len(),
		"wrote pack"
	);
	Ok(())
}
