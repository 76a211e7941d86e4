//! Track and alias records shared by the catalog pipeline and its consumers.

use serde::{Deserialize, Serialize};

use crate::Sha1;
use crate::slot::{InvalidCourseId, slot_to_course_id};

/// Slot value meaning "unassigned". Such tracks never reach emitted output.
pub const UNASSIGNED_SLOT: u32 = 0;

/// Type code for battle arenas. Anything else is treated as a race track.
pub const BATTLE_TYPE: u32 = 2;

/// A single racing-track definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
	/// Content fingerprint of the track file.
	pub identity_hash: Sha1,
	/// Upstream community database id. Only used as a join key.
	pub external_id: Option<u32>,
	/// Display name, already prefixed and length-capped.
	pub name: String,
	/// Placement slot, [`UNASSIGNED_SLOT`] when unassigned.
	pub slot_id: u32,
	/// Category code (1 = race, 2 = battle).
	pub kind: u32,
	/// Music slot override. `None` lets the game pick from the slot.
	pub music_id: Option<u32>,
	pub version: Option<String>,
}

impl Track {
	pub fn is_assigned(&self) -> bool {
		self.slot_id != UNASSIGNED_SLOT
	}

	pub fn is_battle(&self) -> bool {
		self.kind == BATTLE_TYPE
	}

	/// Maps the slot to the in-game course id.
	///
	/// Returns `Ok(None)` for unassigned tracks.
	pub fn course_id(&self) -> Result<Option<u8>, InvalidCourseId> {
		slot_to_course_id(self.slot_id, self.kind)
	}
}

/// Maps a superseded identity hash to the canonical one it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasEntry {
	pub aliased_hash: Sha1,
	pub canonical_hash: Sha1,
}
