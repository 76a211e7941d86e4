use clap::CommandFactory;
use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("trackdb").chain(args.iter().copied())).unwrap()
}

fn build_args(args: &[&str]) -> BuildArgs {
	match parse(args).command {
		Command::Build(args) => args,
		other => panic!("expected build, got {other:?}"),
	}
}

#[test]
fn schema_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn build_without_flags_uses_defaults() {
	let config = build_args(&["build"]).pipeline_config().unwrap();
	assert_eq!(config, PipelineConfig::default());
}

#[test]
fn flags_override_paths_and_mode() {
	let config = build_args(&[
		"build",
		"--primary",
		"data/tracks.csv",
		"--supplemental",
		"data/extra.list",
		"--aliases",
		"data/ref.txt",
		"--out",
		"build",
		"--single",
	])
	.pipeline_config()
	.unwrap();

	assert_eq!(config.sources.primary.path, PathBuf::from("data/tracks.csv"));
	let supplemental = config.sources.supplemental.unwrap();
	assert_eq!(supplemental.path, PathBuf::from("data/extra.list"));
	assert!(supplemental.url.is_some());
	assert_eq!(config.sources.aliases.path, PathBuf::from("data/ref.txt"));
	assert_eq!(config.sources.aliases.header_lines, 10);
	assert_eq!(config.output.dir, PathBuf::from("build"));
	assert_eq!(config.output.mode, OutputMode::Single);
}

#[test]
fn no_supplemental_clears_the_source() {
	let config = build_args(&["build", "--no-supplemental"]).pipeline_config().unwrap();
	assert_eq!(config.sources.supplemental, None);
}

#[test]
fn supplemental_and_no_supplemental_conflict() {
	let result = Cli::try_parse_from(["trackdb", "build", "--supplemental", "x", "--no-supplemental"]);
	assert!(result.is_err());
}

#[test]
fn flags_override_config_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("trackdb.toml");
	std::fs::write(&path, "[output]\ndir = \"from-file\"\nmode = \"single\"\n\n[names]\nmax_len = 32\n").unwrap();

	let mut args = build_args(&["build", "--out", "from-flag"]);
	args.config = Some(path);
	let config = args.pipeline_config().unwrap();

	assert_eq!(config.output.dir, PathBuf::from("from-flag"));
	assert_eq!(config.output.mode, OutputMode::Single);
	assert_eq!(config.names.max_len, 32);
}

#[test]
fn missing_config_file_is_an_error() {
	let mut args = build_args(&["build"]);
	args.config = Some(PathBuf::from("/nonexistent/trackdb.toml"));
	assert!(args.pipeline_config().is_err());
}

#[test]
fn pack_defaults_output_path() {
	let Command::Pack(args) = parse(&["pack", "vanilla.ini"]).command else {
		panic!("expected pack");
	};
	assert_eq!(args.config, PathBuf::from("vanilla.ini"));
	assert_eq!(args.out, PathBuf::from("pack.bin"));
}

#[test]
fn inspect_parses_hex_hash() {
	let hex = "0123456789abcdef0123456789abcdef01234567";
	let Command::Inspect(args) = parse(&["-v", "inspect", "catalog.bin", "--hash", hex]).command else {
		panic!("expected inspect");
	};
	assert_eq!(args.hash.map(|h| h.to_hex()), Some(hex.to_owned()));
}

#[test]
fn inspect_rejects_short_hash() {
	let result = Cli::try_parse_from(["trackdb", "inspect", "catalog.bin", "--hash", "abc123"]);
	assert!(result.is_err());
}

#[test]
fn verbose_is_global() {
	assert!(parse(&["build", "--verbose"]).verbose);
	assert!(!parse(&["build"]).verbose);
}
