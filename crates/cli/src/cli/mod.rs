//! CLI schema and parsing helpers for the trackdb binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use trackdb_config::{OptionalSourceConfig, OutputMode, PipelineConfig};
use trackdb_primitives::Sha1;

#[derive(Parser, Debug)]
#[command(name = "trackdb")]
#[command(about = "Builds binary track catalogs from community track exports")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build the track catalog and alias table
	Build(BuildArgs),
	/// Build a pack descriptor from a pack config file
	Pack(PackArgs),
	/// Print the contents of a single-file catalog
	Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
	/// Pipeline config file (TOML); defaults apply when omitted
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Primary track export
	#[arg(long, value_name = "PATH")]
	pub primary: Option<PathBuf>,

	/// Supplemental track export
	#[arg(long, value_name = "PATH", conflicts_with = "no_supplemental")]
	pub supplemental: Option<PathBuf>,

	/// Skip the supplemental track export entirely
	#[arg(long)]
	pub no_supplemental: bool,

	/// Alias reference list
	#[arg(long, value_name = "PATH")]
	pub aliases: Option<PathBuf>,

	/// Output directory
	#[arg(short, long, value_name = "DIR")]
	pub out: Option<PathBuf>,

	/// Write one catalog file instead of per-track shards
	#[arg(long)]
	pub single: bool,
}

impl BuildArgs {
	/// Loads the config file (or defaults) and applies flag overrides.
	pub fn pipeline_config(&self) -> trackdb_config::Result<PipelineConfig> {
		let mut config = PipelineConfig::load_or_default(self.config.as_deref())?;
		self.apply(&mut config);
		Ok(config)
	}

	fn apply(&self, config: &mut PipelineConfig) {
		let sources = &mut config.sources;
		if let Some(path) = &self.primary {
			sources.primary.path = path.clone();
		}
		if self.no_supplemental {
			sources.supplemental = None;
		} else if let Some(path) = &self.supplemental {
			match &mut sources.supplemental {
				Some(supplemental) => supplemental.path = path.clone(),
				None => {
					sources.supplemental = Some(OptionalSourceConfig {
						path: path.clone(),
						header_lines: 1,
						url: None,
					});
				}
			}
		}
		if let Some(path) = &self.aliases {
			sources.aliases.path = path.clone();
		}
		if let Some(dir) = &self.out {
			config.output.dir = dir.clone();
		}
		if self.single {
			config.output.mode = OutputMode::Single;
		}
	}
}

#[derive(Args, Debug)]
pub struct PackArgs {
	/// Pack config file
	#[arg(value_name = "CONFIG")]
	pub config: PathBuf,

	/// Where to write the pack descriptor
	#[arg(short, long, value_name = "PATH", default_value = "pack.bin")]
	pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
	/// Single-file catalog to read
	#[arg(value_name = "CATALOG")]
	pub catalog: PathBuf,

	/// Resolve one identity hash (hex), following aliases
	#[arg(long, value_name = "HEX")]
	pub hash: Option<Sha1>,
}

#[cfg(test)]
mod tests;
