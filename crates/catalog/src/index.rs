//! External id → canonical identity lookup used to join alias references.

use rustc_hash::FxHashMap;
use trackdb_primitives::{Sha1, Track};

/// The canonical hash and slot recorded for one external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
	pub hash: Sha1,
	pub slot_id: u32,
}

/// Read-only join structure, built once from the merged (unfiltered) track list.
#[derive(Debug, Default)]
pub struct IdentityIndex {
	entries: FxHashMap<u32, IndexEntry>,
}

impl IdentityIndex {
	/// Indexes every track carrying an external id. The first occurrence of
	/// an id wins; later ones are ignored.
	pub fn build<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Self {
		let mut entries = FxHashMap::default();
		for track in tracks {
			let Some(external_id) = track.external_id else {
				continue;
			};
			entries.entry(external_id).or_insert(IndexEntry {
				hash: track.identity_hash,
				slot_id: track.slot_id,
			});
		}
		Self { entries }
	}

	pub fn get(&self, external_id: u32) -> Option<&IndexEntry> {
		self.entries.get(&external_id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
