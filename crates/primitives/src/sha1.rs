//! Track identity hashes.
//!
//! Every text source (track lists, alias reference, pack config) spells
//! identity hashes as 40 hex digits. [`Sha1::from_str`] is the single place
//! text becomes the 20-byte in-memory form, so all sources share one encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a SHA-1 digest in bytes.
pub const SHA1_LEN: usize = 0x14;

/// Errors produced while decoding an identity hash.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Sha1Error {
	/// The text was not valid hex or not exactly 40 digits long.
	#[error("invalid identity hash '{text}': {error}")]
	Hex {
		/// The offending text.
		text: String,
		/// The underlying decode failure.
		error: hex::FromHexError,
	},
}

/// Fixed-length content fingerprint identifying a track.
#[derive(Hash, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sha1([u8; SHA1_LEN]);

impl Sha1 {
	pub const fn new(bytes: [u8; SHA1_LEN]) -> Self {
		Self(bytes)
	}

	/// Lowercase hex spelling, as used for shard file names.
	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl fmt::Display for Sha1 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl fmt::Debug for Sha1 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Sha1({self})")
	}
}

impl FromStr for Sha1 {
	type Err = Sha1Error;

	fn from_str(encoded: &str) -> Result<Self, Self::Err> {
		let mut decoded = [0_u8; SHA1_LEN];
		hex::decode_to_slice(encoded, &mut decoded).map_err(|error| Sha1Error::Hex {
			text: encoded.to_owned(),
			error,
		})?;
		Ok(Self(decoded))
	}
}
