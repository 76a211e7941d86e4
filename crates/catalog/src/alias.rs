//! Joins the alias reference source against the [`IdentityIndex`].
//!
//! A reference line becomes an [`AliasEntry`] only when all of these hold:
//!
//! 1. its flags contain none of the exclusion characters,
//! 2. its hash differs from the canonical hash indexed for its external id,
//! 3. the canonical track has a non-zero slot.
//!
//! Rule 1 is checked first; a line that passes it but names an external id
//! missing from the index aborts the run with
//! [`CatalogError::UnknownExternalId`].

use trackdb_primitives::AliasEntry;

use crate::index::IdentityIndex;
use crate::record::ReferenceRecord;
use crate::source::ReferenceSource;
use crate::{CatalogError, Result};

/// Flag characters that disqualify a reference line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionFlags(Vec<char>);

impl ExclusionFlags {
	pub fn new(chars: &str) -> Self {
		Self(chars.chars().collect())
	}

	pub fn excludes(&self, flags: &str) -> bool {
		flags.chars().any(|c| self.0.contains(&c))
	}
}

impl Default for ExclusionFlags {
	/// `Z` removed, `P` placeholder/pending, `d` duplicate.
	fn default() -> Self {
		Self::new("ZPd")
	}
}

/// Outcome of checking a single reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	Alias(AliasEntry),
	Excluded,
	SameAsCanonical,
	UnassignedCanonical,
}

pub struct AliasResolver<'a> {
	index: &'a IdentityIndex,
	exclusion: &'a ExclusionFlags,
}

impl<'a> AliasResolver<'a> {
	pub fn new(index: &'a IdentityIndex, exclusion: &'a ExclusionFlags) -> Self {
		Self { index, exclusion }
	}

	/// Applies the three rules to one record. `None` means the external id
	/// is not indexed.
	pub fn check(&self, record: &ReferenceRecord) -> Option<Resolution> {
		if self.exclusion.excludes(&record.flags) {
			return Some(Resolution::Excluded);
		}

		let canonical = self.index.get(record.external_id)?;
		Some(if canonical.hash == record.hash {
			Resolution::SameAsCanonical
		} else if canonical.slot_id == 0 {
			Resolution::UnassignedCanonical
		} else {
			Resolution::Alias(AliasEntry {
				aliased_hash: record.hash,
				canonical_hash: canonical.hash,
			})
		})
	}

	/// Streams `source` and collects aliases in source order.
	pub fn resolve(&self, source: &ReferenceSource) -> Result<Vec<AliasEntry>> {
		let mut aliases = Vec::new();
		let mut excluded = 0_usize;

		for item in source.open()? {
			let (line, record) = item?;
			match self.check(&record) {
				Some(Resolution::Alias(alias)) => aliases.push(alias),
				Some(Resolution::Excluded) => excluded += 1,
				Some(_) => {}
				None => {
					return Err(CatalogError::UnknownExternalId {
						external_id: record.external_id,
						path: source.path().to_path_buf(),
						line,
					});
				}
			}
		}

		tracing::info!(
			path = %source.path().display(),
			aliases = aliases.len(),
			excluded,
			"resolved aliases"
		);
		Ok(aliases)
	}
}

#[cfg(test)]
mod tests;
