//! trackdb binary.
//!
//! `build` runs the catalog pipeline, `pack` writes a pack descriptor, and
//! `inspect` prints what a single-file catalog holds.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use trackdb_catalog::blob::read_blob;
use trackdb_catalog::{Catalog, build_pack, pack::write_pack};
use trackdb_config::PackConfig;

use crate::cli::{BuildArgs, Cli, Command, InspectArgs, PackArgs};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::Build(args) => build(&args),
		Command::Pack(args) => pack(&args),
		Command::Inspect(args) => inspect(&args),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
	let config = args.pipeline_config().context("failed to load pipeline config")?;
	info!(mode = ?config.output.mode, out = %config.output.dir.display(), "building catalog");

	let report = trackdb_catalog::run(&config)?;
	println!("Finished writing {} to {}", report.summary, report.destination.display());
	Ok(())
}

fn pack(args: &PackArgs) -> anyhow::Result<()> {
	let config = PackConfig::load(&args.config)
		.with_context(|| format!("failed to load pack config {}", args.config.display()))?;

	let pack = build_pack(&config);
	write_pack(&pack, &args.out)?;
	println!(
		"Finished writing pack \"{}\" ({} tracks, {} unreleased) to {}",
		pack.name,
		pack.track_count(),
		pack.unreleased_tracks.len(),
		args.out.display()
	);
	Ok(())
}

fn inspect(args: &InspectArgs) -> anyhow::Result<()> {
	let catalog: Catalog = read_blob(&args.catalog)?;
	println!("{}: {} tracks, {} aliases", args.catalog.display(), catalog.tracks.len(), catalog.aliases.len());

	let Some(hash) = args.hash else {
		return Ok(());
	};
	let track = catalog
		.resolve(&hash)
		.with_context(|| format!("{hash} is not in the catalog"))?;

	if track.identity_hash != hash {
		println!("{hash} is an alias of {}", track.identity_hash);
	}
	let course = match track.course_id() {
		Ok(Some(id)) => format!("{id:#04x}"),
		Ok(None) => "unassigned".to_owned(),
		Err(e) => format!("invalid ({e})"),
	};
	println!(
		"{}: \"{}\" slot {} type {} course {course} music {}",
		track.identity_hash,
		track.name,
		track.slot_id,
		track.kind,
		track.music_id.map_or_else(|| "default".to_owned(), |m| m.to_string()),
	);
	Ok(())
}
