//! Slot → course id tables.
//!
//! Slots are written `CT` where `C` is the cup and `T` the track within it.

use thiserror::Error;

/// A slot or kind that has no course id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCourseId {
	/// The type code is neither race (1) nor battle (2).
	#[error("unknown slot kind: {0}")]
	InvalidSlotKind(u32),
	/// A race slot outside the track table.
	#[error("invalid track slot id: {0}")]
	InvalidTrackSlot(u32),
	/// A battle slot outside the arena table.
	#[error("invalid arena slot id: {0}")]
	InvalidArenaSlot(u32),
}

/// Looks up the course id for a slot of the given kind (1 = race, 2 = battle).
///
/// Slot 0 is unassigned and yields `Ok(None)` regardless of kind.
pub fn slot_to_course_id(slot_id: u32, kind: u32) -> Result<Option<u8>, InvalidCourseId> {
	if slot_id == 0 {
		return Ok(None);
	}

	let course = match kind {
		1 => slot_to_track_id(slot_id).ok_or(InvalidCourseId::InvalidTrackSlot(slot_id))?,
		2 => slot_to_arena_id(slot_id).ok_or(InvalidCourseId::InvalidArenaSlot(slot_id))?,
		_ => return Err(InvalidCourseId::InvalidSlotKind(kind)),
	};
	Ok(Some(course))
}

fn slot_to_track_id(slot_id: u32) -> Option<u8> {
	Some(match slot_id {
		11 => 0x8,
		12 => 0x1,
		13 => 0x2,
		14 => 0x4,
		21 => 0x0,
		22 => 0x5,
		23 => 0x6,
		24 => 0x7,
		31 => 0x9,
		32 => 0xF,
		33 => 0xB,
		34 => 0x3,
		41 => 0xE,
		42 => 0xA,
		43 => 0xC,
		44 => 0xD,
		51 => 0x10,
		52 => 0x14,
		53 => 0x19,
		54 => 0x1A,
		61 => 0x1B,
		62 => 0x1F,
		63 => 0x17,
		64 => 0x12,
		71 => 0x15,
		72 => 0x1E,
		73 => 0x1D,
		74 => 0x11,
		81 => 0x18,
		82 => 0x16,
		83 => 0x13,
		84 => 0x1C,
		_ => return None,
	})
}

fn slot_to_arena_id(slot_id: u32) -> Option<u8> {
	Some(match slot_id {
		11 => 0x21,
		12 => 0x20,
		13 => 0x23,
		14 => 0x22,
		15 => 0x24,
		21 => 0x27,
		22 => 0x28,
		23 => 0x29,
		24 => 0x25,
		25 => 0x26,
		_ => return None,
	})
}
