//! The assembled catalog: tracks in insertion order plus the alias table.

use serde::{Deserialize, Serialize};
use trackdb_primitives::{AliasEntry, Sha1, Track};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
	pub tracks: Vec<Track>,
	pub aliases: Vec<AliasEntry>,
}

impl Catalog {
	/// Looks a track up by its own identity hash.
	pub fn get(&self, hash: &Sha1) -> Option<&Track> {
		self.tracks.iter().find(|t| t.identity_hash == *hash)
	}

	/// Returns the canonical hash for `hash` if it is a known alias.
	pub fn canonical_hash(&self, hash: &Sha1) -> Option<Sha1> {
		self.aliases.iter().find(|a| a.aliased_hash == *hash).map(|a| a.canonical_hash)
	}

	/// Looks a track up directly, then through the first matching alias.
	pub fn resolve(&self, hash: &Sha1) -> Option<&Track> {
		self.get(hash).or_else(|| self.get(&self.canonical_hash(hash)?))
	}
}
