//! Reader for sectioned `key = value` text.
//!
//! ```text
//! [Pack Info]
//! name = Vanilla
//! race = 1a2b...,3c4d...,
//!
//! [5e6f...]
//! slot: 11
//! type: 1
//! ```
//!
//! Keys are case-insensitive and stored lowercased; section names are kept
//! verbatim. Lines starting with `#` or `;` are comments. An indented line
//! continues the previous value.

use crate::{ConfigError, Result};

/// One `[name]` block and its assignments in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub name: String,
	entries: Vec<(String, String)>,
}

impl Section {
	fn new(name: String) -> Self {
		Self { name, entries: Vec::new() }
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		let key = key.to_ascii_lowercase();
		self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
	}

	pub fn require(&self, key: &str) -> Result<&str> {
		self.get(key).ok_or_else(|| ConfigError::MissingField {
			section: self.name.clone(),
			key: key.to_owned(),
		})
	}

	pub fn require_u32(&self, key: &str) -> Result<u32> {
		let value = self.require(key)?;
		value.parse().map_err(|_| ConfigError::InvalidInteger {
			section: self.name.clone(),
			key: key.to_owned(),
			value: value.to_owned(),
		})
	}

	pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

/// A parsed document: sections in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionedDocument {
	sections: Vec<Section>,
}

impl SectionedDocument {
	pub fn parse(input: &str) -> Result<Self> {
		let mut sections: Vec<Section> = Vec::new();

		for (idx, raw) in input.lines().enumerate() {
			let line_no = idx + 1;
			let line = raw.trim();

			if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
				continue;
			}

			if raw.starts_with([' ', '\t'])
				&& let Some((_, value)) = sections.last_mut().and_then(|s| s.entries.last_mut())
			{
				value.push('\n');
				value.push_str(line);
				continue;
			}

			if let Some(header) = line.strip_prefix('[') {
				let name = header.strip_suffix(']').ok_or_else(|| ConfigError::Syntax {
					line: line_no,
					message: format!("unterminated section header '{line}'"),
				})?;
				if sections.iter().any(|s| s.name == name) {
					return Err(ConfigError::DuplicateSection(name.to_owned()));
				}
				sections.push(Section::new(name.to_owned()));
				continue;
			}

			let Some(split) = line.find(['=', ':']) else {
				return Err(ConfigError::Syntax {
					line: line_no,
					message: format!("expected 'key = value', found '{line}'"),
				});
			};
			let key = line[..split].trim().to_ascii_lowercase();
			let value = line[split + 1..].trim().to_owned();

			let Some(section) = sections.last_mut() else {
				return Err(ConfigError::Syntax {
					line: line_no,
					message: "assignment before any section header".into(),
				});
			};
			if key.is_empty() {
				return Err(ConfigError::Syntax {
					line: line_no,
					message: "empty key".into(),
				});
			}
			if section.entries.iter().any(|(k, _)| *k == key) {
				return Err(ConfigError::DuplicateKey {
					section: section.name.clone(),
					key,
				});
			}
			section.entries.push((key, value));
		}

		Ok(Self { sections })
	}

	pub fn section(&self, name: &str) -> Option<&Section> {
		self.sections.iter().find(|s| s.name == name)
	}

	pub fn require_section(&self, name: &str) -> Result<&Section> {
		self.section(name).ok_or_else(|| ConfigError::MissingSection(name.to_owned()))
	}

	pub fn sections(&self) -> impl Iterator<Item = &Section> {
		self.sections.iter()
	}
}
