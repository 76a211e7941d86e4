use pretty_assertions::assert_eq;
use trackdb_primitives::{AliasEntry, Sha1, Track};

use super::*;
use crate::blob::read_blob;

fn catalog() -> Catalog {
	let track = |byte: u8, slot_id: u32| Track {
		identity_hash: Sha1::new([byte; 20]),
		external_id: Some(u32::from(byte)),
		name: format!("track {byte}"),
		slot_id,
		kind: 1,
		music_id: Some(3),
		version: None,
	};
	Catalog {
		tracks: vec![track(1, 11), track(2, 12)],
		aliases: vec![AliasEntry {
			aliased_hash: Sha1::new([9; 20]),
			canonical_hash: Sha1::new([1; 20]),
		}],
	}
}

#[test]
fn single_file_round_trips() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nested/catalog.bin");

	let summary = write_catalog(&catalog(), &path).unwrap();
	assert_eq!(summary, EmitSummary { tracks: 2, aliases: 1 });
	assert_eq!(read_blob::<Catalog>(&path).unwrap(), catalog());
}

#[test]
fn sharded_layout_names_files_by_hash() {
	let dir = tempfile::tempdir().unwrap();
	let catalog = catalog();

	let summary = write_sharded(&catalog, dir.path()).unwrap();
	assert_eq!(summary.tracks, 2);

	let mut names: Vec<_> = std::fs::read_dir(dir.path().join(TRACKS_DIR))
		.unwrap()
		.map(|e| e.unwrap().file_name().into_string().unwrap())
		.collect();
	names.sort();
	assert_eq!(names, [format!("{}.bin", "01".repeat(20)), format!("{}.bin", "02".repeat(20))]);

	let shard: Track = read_blob(&shard_path(dir.path(), &catalog.tracks[1].identity_hash)).unwrap();
	assert_eq!(shard, catalog.tracks[1]);

	let aliases: Vec<AliasEntry> = read_blob(&dir.path().join(ALIAS_FILE)).unwrap();
	assert_eq!(aliases, catalog.aliases);
}

#[test]
fn sharded_output_tolerates_existing_directory() {
	let dir = tempfile::tempdir().unwrap();
	write_sharded(&catalog(), dir.path()).unwrap();
	write_sharded(&catalog(), dir.path()).unwrap();
}

#[test]
fn rewrite_with_fewer_tracks_removes_stale_shards() {
	let dir = tempfile::tempdir().unwrap();
	let tracks_dir = dir.path().join(TRACKS_DIR);
	write_sharded(&catalog(), dir.path()).unwrap();
	std::fs::write(tracks_dir.join("notes.txt"), "kept").unwrap();

	let mut smaller = catalog();
	smaller.tracks.truncate(1);
	let summary = write_sharded(&smaller, dir.path()).unwrap();

	let mut names: Vec<_> = std::fs::read_dir(&tracks_dir)
		.unwrap()
		.map(|e| e.unwrap().file_name().into_string().unwrap())
		.collect();
	names.sort();
	assert_eq!(summary.tracks, 1);
	assert_eq!(names, [format!("{}.bin", "01".repeat(20)), "notes.txt".to_owned()]);
}

#[test]
fn repeated_writes_are_byte_identical() {
	let dir = tempfile::tempdir().unwrap();
	let a = dir.path().join("a.bin");
	let b = dir.path().join("b.bin");

	write_catalog(&catalog(), &a).unwrap();
	write_catalog(&catalog(), &b).unwrap();
	assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
}

#[test]
fn summary_display() {
	assert_eq!(EmitSummary { tracks: 3, aliases: 0 }.to_string(), "3 tracks and 0 aliases");
}
