use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

const HASH_A: &str = "6dea567e6b20e8766215613b65885a652c9de88d";
const HASH_B: &str = "7e293e74991b0bf33e2ffa420b2ebe735ed23c38";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
	let path = dir.path().join(name);
	std::fs::write(&path, content).unwrap();
	path
}

#[test]
fn header_and_blank_lines_are_skipped() {
	let dir = tempfile::tempdir().unwrap();
	let path = write(&dir, "src.txt", "header\nfirst\n\n   \nsecond\n");

	let lines: Vec<_> = DelimitedSource::new(&path, 1).open().unwrap().map(Result::unwrap).collect();
	assert_eq!(
		lines,
		vec![
			SourceLine { number: 2, text: "first".into() },
			SourceLine { number: 5, text: "second".into() },
		]
	);
}

#[test]
fn reopening_restarts_the_sequence() {
	let dir = tempfile::tempdir().unwrap();
	let path = write(&dir, "src.txt", "h\na\nb\n");
	let source = DelimitedSource::new(&path, 1);

	let first: Vec<_> = source.open().unwrap().map(|l| l.unwrap().text).collect();
	let second: Vec<_> = source.open().unwrap().map(|l| l.unwrap().text).collect();
	assert_eq!(first, ["a", "b"]);
	assert_eq!(first, second);
}

#[test]
fn missing_file_is_source_not_found() {
	let dir = tempfile::tempdir().unwrap();
	let err = DelimitedSource::new(dir.path().join("absent.csv"), 1).open().err().unwrap();
	assert!(err.is_source_not_found());
}

#[test]
fn track_source_decodes_lines() {
	let dir = tempfile::tempdir().unwrap();
	let path = write(
		&dir,
		"tracks.csv",
		&format!("sha1|id|...\n{HASH_A}|7|x|x|1|5|3|x|x||Luigi Circuit|x|v1|x|x|x\r\n"),
	);

	let tracks = TrackSource::new(DelimitedSource::new(&path, 1), 40).read_all().unwrap();
	assert_eq!(tracks.len(), 1);
	assert_eq!(tracks[0].identity_hash.to_string(), HASH_A);
	assert_eq!(tracks[0].slot_id, 5);
	assert_eq!(tracks[0].version.as_deref(), Some("v1"));
}

#[test]
fn malformed_track_line_reports_location() {
	let dir = tempfile::tempdir().unwrap();
	let path = write(&dir, "tracks.csv", "header\n\nnot|enough|fields\n");

	let err = TrackSource::new(DelimitedSource::new(&path, 1), 40).read_all().unwrap_err();
	match err {
		CatalogError::MalformedRecord { path: p, line, error } => {
			assert_eq!(p, path);
			assert_eq!(line, 3);
			assert_eq!(error, RecordError::FieldCount { expected: 16, found: 3 });
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn reference_source_skips_metadata_lines() {
	let dir = tempfile::tempdir().unwrap();
	let content = format!(
		"#meta 1\n#meta 2\n|note|||x|\n{HASH_B}|7|x|x||x\n\n{HASH_A}|8|x|x|Z|x\n"
	);
	let path = write(&dir, "sha1-reference.txt", &content);

	let records: Vec<_> = ReferenceSource::new(DelimitedSource::new(&path, 2))
		.open()
		.unwrap()
		.map(Result::unwrap)
		.collect();

	assert_eq!(records.len(), 2);
	assert_eq!(records[0].0, 4);
	assert_eq!(records[0].1.external_id, 7);
	assert_eq!(records[1].0, 6);
	assert_eq!(records[1].1.flags, "Z");
}
