//! Lazy readers over `|`-delimited source files.
//!
//! Each `open` call starts a fresh pass over the file: discard the fixed
//! header, then yield one item per remaining non-blank line. Re-opening the
//! same path yields the same sequence.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::iter::{Enumerate, Skip};
use std::path::{Path, PathBuf};

use trackdb_config::SourceConfig;
use trackdb_primitives::Track;

use crate::record::{DELIMITER, ReferenceRecord, parse_reference_line, parse_track_line};
use crate::{CatalogError, RecordError, Result};

/// A delimited file and how many leading lines to throw away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedSource {
	path: PathBuf,
	header_lines: usize,
}

impl DelimitedSource {
	pub fn new(path: impl Into<PathBuf>, header_lines: usize) -> Self {
		Self {
			path: path.into(),
			header_lines,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn open(&self) -> Result<SourceLines> {
		let file = File::open(&self.path).map_err(|error| match error.kind() {
			ErrorKind::NotFound => CatalogError::SourceNotFound {
				path: self.path.clone(),
			},
			_ => CatalogError::io(&self.path, error),
		})?;

		tracing::debug!(path = %self.path.display(), header_lines = self.header_lines, "opened source");
		Ok(SourceLines {
			path: self.path.clone(),
			lines: BufReader::new(file).lines().enumerate().skip(self.header_lines),
		})
	}
}

impl From<&SourceConfig> for DelimitedSource {
	fn from(config: &SourceConfig) -> Self {
		Self::new(&config.path, config.header_lines)
	}
}

/// A non-blank line after the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
	/// 1-based line number within the file.
	pub number: usize,
	pub text: String,
}

pub struct SourceLines {
	path: PathBuf,
	lines: Skip<Enumerate<Lines<BufReader<File>>>>,
}

impl SourceLines {
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn malformed(&self, line: usize, error: RecordError) -> CatalogError {
		CatalogError::MalformedRecord {
			path: self.path.clone(),
			line,
			error,
		}
	}
}

impl Iterator for SourceLines {
	type Item = Result<SourceLine>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let (idx, line) = self.lines.next()?;
			match line {
				Err(error) => return Some(Err(CatalogError::io(&self.path, error))),
				Ok(text) if text.trim().is_empty() => continue,
				Ok(text) => {
					return Some(Ok(SourceLine {
						number: idx + 1,
						text,
					}));
				}
			}
		}
	}
}

/// A source of 16-field track lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSource {
	source: DelimitedSource,
	max_name_len: usize,
}

impl TrackSource {
	pub fn new(source: DelimitedSource, max_name_len: usize) -> Self {
		Self { source, max_name_len }
	}

	pub fn path(&self) -> &Path {
		self.source.path()
	}

	pub fn open(&self) -> Result<TrackRecords> {
		Ok(TrackRecords {
			lines: self.source.open()?,
			max_name_len: self.max_name_len,
		})
	}

	/// Reads the whole source in one pass.
	pub fn read_all(&self) -> Result<Vec<Track>> {
		let tracks = self.open()?.collect::<Result<Vec<_>>>()?;
		tracing::debug!(path = %self.path().display(), tracks = tracks.len(), "read track source");
		Ok(tracks)
	}
}

pub struct TrackRecords {
	lines: SourceLines,
	max_name_len: usize,
}

impl Iterator for TrackRecords {
	type Item = Result<Track>;

	fn next(&mut self) -> Option<Self::Item> {
		let line = match self.lines.next()? {
			Ok(line) => line,
			Err(e) => return Some(Err(e)),
		};
		Some(
			parse_track_line(&line.text, self.max_name_len)
				.map_err(|e| self.lines.malformed(line.number, e)),
		)
	}
}

/// A source of 6-field alias reference lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSource {
	source: DelimitedSource,
}

impl ReferenceSource {
	pub fn new(source: DelimitedSource) -> Self {
		Self { source }
	}

	pub fn path(&self) -> &Path {
		self.source.path()
	}

	pub fn open(&self) -> Result<ReferenceRecords> {
		Ok(ReferenceRecords {
			lines: self.source.open()?,
		})
	}
}

/// Yields `(line number, record)`. Lines with an empty first field are
/// metadata and are skipped.
pub struct ReferenceRecords {
	lines: SourceLines,
}

impl Iterator for ReferenceRecords {
	type Item = Result<(usize, ReferenceRecord)>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let line = match self.lines.next()? {
				Ok(line) => line,
				Err(e) => return Some(Err(e)),
			};
			if line.text.split(DELIMITER).next().is_none_or(|first| first.trim().is_empty()) {
				continue;
			}
			return Some(
				parse_reference_line(&line.text)
					.map(|record| (line.number, record))
					.map_err(|e| self.lines.malformed(line.number, e)),
			);
		}
	}
}

#[cfg(test)]
mod tests;
