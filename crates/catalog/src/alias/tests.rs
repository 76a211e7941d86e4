use pretty_assertions::assert_eq;
use rstest::rstest;
use trackdb_primitives::{Sha1, Track};

use super::*;
use crate::source::DelimitedSource;

fn sha(byte: u8) -> Sha1 {
	Sha1::new([byte; 20])
}

fn track(byte: u8, external_id: u32, slot_id: u32) -> Track {
	Track {
		identity_hash: sha(byte),
		external_id: Some(external_id),
		name: String::new(),
		slot_id,
		kind: 1,
		music_id: None,
		version: None,
	}
}

fn record(byte: u8, external_id: u32, flags: &str) -> ReferenceRecord {
	ReferenceRecord {
		hash: sha(byte),
		external_id,
		flags: flags.into(),
	}
}

#[rstest]
#[case::removed("Z")]
#[case::placeholder("P")]
#[case::duplicate("d")]
#[case::mixed("xPy")]
fn exclusion_flags_block_aliases(#[case] flags: &str) {
	let index = IdentityIndex::build(&[track(1, 7, 11)]);
	let exclusion = ExclusionFlags::default();
	let resolver = AliasResolver::new(&index, &exclusion);

	assert_eq!(resolver.check(&record(2, 7, flags)), Some(Resolution::Excluded));
}

#[test]
fn differing_hash_with_clean_flags_is_an_alias() {
	let index = IdentityIndex::build(&[track(1, 7, 5)]);
	let exclusion = ExclusionFlags::default();
	let resolver = AliasResolver::new(&index, &exclusion);

	assert_eq!(
		resolver.check(&record(2, 7, "")),
		Some(Resolution::Alias(AliasEntry {
			aliased_hash: sha(2),
			canonical_hash: sha(1),
		}))
	);
}

#[test]
fn canonical_hash_is_not_its_own_alias() {
	let index = IdentityIndex::build(&[track(1, 7, 5)]);
	let exclusion = ExclusionFlags::default();
	let resolver = AliasResolver::new(&index, &exclusion);

	assert_eq!(resolver.check(&record(1, 7, "")), Some(Resolution::SameAsCanonical));
}

#[test]
fn unassigned_canonical_blocks_alias() {
	let index = IdentityIndex::build(&[track(1, 7, 0)]);
	let exclusion = ExclusionFlags::default();
	let resolver = AliasResolver::new(&index, &exclusion);

	assert_eq!(resolver.check(&record(2, 7, "")), Some(Resolution::UnassignedCanonical));
}

#[test]
fn unknown_id_is_reported_as_none() {
	let index = IdentityIndex::default();
	let exclusion = ExclusionFlags::default();
	let resolver = AliasResolver::new(&index, &exclusion);

	assert_eq!(resolver.check(&record(2, 99, "")), None);
	assert_eq!(resolver.check(&record(2, 99, "Z")), Some(Resolution::Excluded));
}

#[test]
fn custom_exclusion_set() {
	let exclusion = ExclusionFlags::new("q");
	assert!(exclusion.excludes("abq"));
	assert!(!exclusion.excludes("ZPd"));
}

fn reference_file(dir: &tempfile::TempDir, lines: &[String]) -> ReferenceSource {
	let path = dir.path().join("sha1-reference.txt");
	let mut content = "meta\n".repeat(10);
	for line in lines {
		content.push_str(line);
		content.push('\n');
	}
	std::fs::write(&path, content).unwrap();
	ReferenceSource::new(DelimitedSource::new(path, 10))
}

#[test]
fn resolve_keeps_source_order() {
	let dir = tempfile::tempdir().unwrap();
	let source = reference_file(
		&dir,
		&[
			format!("{}|8|x|x||x", sha(4)),
			format!("{}|7|x|x||x", sha(1)),
			format!("{}|7|x|x|Z|x", sha(5)),
			format!("{}|7|x|x||x", sha(3)),
		],
	);
	let index = IdentityIndex::build(&[track(1, 7, 5), track(2, 8, 6)]);
	let exclusion = ExclusionFlags::default();

	let aliases = AliasResolver::new(&index, &exclusion).resolve(&source).unwrap();
	assert_eq!(
		aliases,
		vec![
			AliasEntry {
				aliased_hash: sha(4),
				canonical_hash: sha(2),
			},
			AliasEntry {
				aliased_hash: sha(3),
				canonical_hash: sha(1),
			},
		]
	);
}

#[test]
fn resolve_fails_on_unknown_external_id() {
	let dir = tempfile::tempdir().unwrap();
	let source = reference_file(&dir, &[format!("{}|7|x|x||x", sha(2)), format!("{}|42|x|x||x", sha(3))]);
	let index = IdentityIndex::build(&[track(1, 7, 5)]);
	let exclusion = ExclusionFlags::default();

	let err = AliasResolver::new(&index, &exclusion).resolve(&source).unwrap_err();
	assert!(matches!(
		err,
		CatalogError::UnknownExternalId {
			external_id: 42,
			line: 12,
			..
		}
	));
}
