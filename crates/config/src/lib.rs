//! Configuration for the track catalog tools.
//!
//! Two kinds of configuration are read here, both once at startup and
//! treated as read-only afterwards:
//!
//! - **Pipeline** ([`PipelineConfig`]): TOML describing where the track,
//!   supplemental, and alias sources live, header sizes, name limits,
//!   exclusion flags, and output layout. Every field has a default.
//! - **Pack** ([`PackConfig`]): sectioned `key = value` text with a
//!   `Pack Info` section (name, author, description, comma-separated
//!   race/coin/balloon hash lists) plus one section per unreleased track.

pub mod error;
pub mod ini;
pub mod pack;
pub mod pipeline;

pub use error::{ConfigError, Result};
pub use ini::{Section, SectionedDocument};
pub use pack::{PACK_INFO_SECTION, PackConfig, UnreleasedTrackConfig};
pub use pipeline::{
	AliasesConfig, NamesConfig, OptionalSourceConfig, OutputConfig, OutputMode, PipelineConfig,
	SourceConfig, SourcesConfig,
};
