//! Core types for the track catalog: identity hashes, tracks, and aliases.

/// Identity hash newtype and its hex text form.
pub mod sha1;
/// Slot to course id lookup tables.
pub mod slot;
/// Track and alias records.
pub mod track;

pub use sha1::{SHA1_LEN, Sha1, Sha1Error};
pub use slot::{InvalidCourseId, slot_to_course_id};
pub use track::{AliasEntry, BATTLE_TYPE, Track, UNASSIGNED_SLOT};
