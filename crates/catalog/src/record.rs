//! Decoders for single `|`-delimited lines.
//!
//! Track lines have 16 fields:
//!
//! ```text
//! hash|id|_|_|type|slot|music|_|_|prefix|name|_|version|_|_|_
//! ```
//!
//! Alias reference lines have 6:
//!
//! ```text
//! hash|id|_|_|flags|_
//! ```
//!
//! Decoding is strict: a wrong field count or a non-integer numeric field is
//! an error, never a silently skipped line.

use trackdb_primitives::{Sha1, Track};

use crate::RecordError;

pub const DELIMITER: char = '|';
pub const TRACK_FIELDS: usize = 16;
pub const REFERENCE_FIELDS: usize = 6;

mod track_field {
	pub const HASH: usize = 0;
	pub const EXTERNAL_ID: usize = 1;
	pub const TYPE: usize = 4;
	pub const SLOT: usize = 5;
	pub const MUSIC: usize = 6;
	pub const PREFIX: usize = 9;
	pub const NAME: usize = 10;
	pub const VERSION: usize = 12;
}

mod reference_field {
	pub const HASH: usize = 0;
	pub const EXTERNAL_ID: usize = 1;
	pub const FLAGS: usize = 4;
}

/// One line of the alias reference source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
	pub hash: Sha1,
	pub external_id: u32,
	pub flags: String,
}

/// Splits `line` and checks it has exactly `N` fields.
fn split_fields<const N: usize>(line: &str) -> Result<[&str; N], RecordError> {
	let mut fields = [""; N];
	let mut found = 0;
	for field in line.split(DELIMITER) {
		if found < N {
			fields[found] = field;
		}
		found += 1;
	}
	if found != N {
		return Err(RecordError::FieldCount { expected: N, found });
	}
	Ok(fields)
}

fn parse_u32(field: &'static str, value: &str) -> Result<u32, RecordError> {
	value.trim().parse().map_err(|_| RecordError::InvalidInteger {
		field,
		value: value.to_owned(),
	})
}

/// `prefix name`, or just `name` without a prefix, cut to `max_len` characters.
pub fn display_name(prefix: &str, name: &str, max_len: usize) -> String {
	let mut combined = String::with_capacity(prefix.len() + 1 + name.len());
	combined.push_str(prefix);
	if !prefix.is_empty() {
		combined.push(' ');
	}
	combined.push_str(name);

	match combined.char_indices().nth(max_len) {
		Some((cut, _)) => {
			combined.truncate(cut);
			combined
		}
		None => combined,
	}
}

/// Decodes one track line. `max_name_len` caps the display name in characters.
pub fn parse_track_line(line: &str, max_name_len: usize) -> Result<Track, RecordError> {
	use track_field::*;

	let fields = split_fields::<TRACK_FIELDS>(line)?;

	// Empty or "0" both mean the music follows the slot.
	let music_id = match fields[MUSIC].trim() {
		"" => None,
		music => Some(parse_u32("music", music)?).filter(|&id| id != 0),
	};

	let version = fields[VERSION].trim();

	Ok(Track {
		identity_hash: fields[HASH].trim().parse()?,
		external_id: Some(parse_u32("external id", fields[EXTERNAL_ID])?),
		name: display_name(fields[PREFIX], fields[NAME], max_name_len),
		slot_id: parse_u32("slot", fields[SLOT])?,
		kind: parse_u32("type", fields[TYPE])?,
		music_id,
		version: (!version.is_empty()).then(|| version.to_owned()),
	})
}

/// Decodes one alias reference line.
pub fn parse_reference_line(line: &str) -> Result<ReferenceRecord, RecordError> {
	use reference_field::*;

	let fields = split_fields::<REFERENCE_FIELDS>(line)?;

	Ok(ReferenceRecord {
		hash: fields[HASH].trim().parse()?,
		external_id: parse_u32("external id", fields[EXTERNAL_ID])?,
		flags: fields[FLAGS].to_owned(),
	})
}
