//! Catalog pipeline configuration.
//!
//! Every field has a default matching the stock directory layout, so an
//! empty (or absent) file runs the pipeline as-is:
//!
//! ```toml
//! [sources.primary]
//! path = "extended-tracks.csv"
//! header_lines = 1
//!
//! [sources.supplemental]
//! path = "in/public-ref.list"
//! header_lines = 1
//! url = "http://archive.tock.eu/wbz/public-ref.list"
//!
//! [sources.aliases]
//! path = "in/sha1-reference.txt"
//! header_lines = 10
//!
//! [names]
//! max_len = 40
//!
//! [aliases]
//! exclusion_flags = "ZPd"
//!
//! [output]
//! dir = "out"
//! mode = "sharded"
//! catalog = "catalog.bin"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
	pub sources: SourcesConfig,
	pub names: NamesConfig,
	pub aliases: AliasesConfig,
	pub output: OutputConfig,
}

impl PipelineConfig {
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	/// Loads `path` if given, otherwise returns the defaults.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		path.map_or_else(|| Ok(Self::default()), Self::load)
	}
}

/// A delimited input file and the number of leading lines to discard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
	pub path: PathBuf,
	#[serde(default = "default_header_lines")]
	pub header_lines: usize,
}

fn default_header_lines() -> usize {
	1
}

/// An input that may be absent; `url` is shown to the user when it is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionalSourceConfig {
	pub path: PathBuf,
	#[serde(default = "default_header_lines")]
	pub header_lines: usize,
	pub url: Option<String>,
}

impl OptionalSourceConfig {
	pub fn source(&self) -> SourceConfig {
		SourceConfig {
			path: self.path.clone(),
			header_lines: self.header_lines,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
	pub primary: SourceConfig,
	pub supplemental: Option<OptionalSourceConfig>,
	pub aliases: SourceConfig,
}

impl Default for SourcesConfig {
	fn default() -> Self {
		Self {
			primary: SourceConfig {
				path: "extended-tracks.csv".into(),
				header_lines: 1,
			},
			supplemental: Some(OptionalSourceConfig {
				path: "in/public-ref.list".into(),
				header_lines: 1,
				url: Some("http://archive.tock.eu/wbz/public-ref.list".into()),
			}),
			aliases: SourceConfig {
				path: "in/sha1-reference.txt".into(),
				header_lines: 10,
			},
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamesConfig {
	/// Longest display name the game can store, in characters.
	pub max_len: usize,
}

impl Default for NamesConfig {
	fn default() -> Self {
		Self { max_len: 40 }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AliasesConfig {
	/// Flag characters that disqualify a reference line:
	/// `Z` removed, `P` placeholder/pending, `d` duplicate.
	pub exclusion_flags: String,
}

impl Default for AliasesConfig {
	fn default() -> Self {
		Self {
			exclusion_flags: "ZPd".into(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
	/// One file per track under `tracks/` plus an alias table file.
	#[default]
	Sharded,
	/// A single catalog file holding tracks and aliases.
	Single,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
	pub dir: PathBuf,
	pub mode: OutputMode,
	/// File name of the single-file catalog, relative to `dir`.
	pub catalog: PathBuf,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			dir: "out".into(),
			mode: OutputMode::Sharded,
			catalog: "catalog.bin".into(),
		}
	}
}
