//! Human-shareable group codes
//!
//! A group is joined by typing its code, so codes avoid characters that are
//! easy to confuse when read aloud or written down (no 0/O, 1/I). The
//! alphabet has 32 characters, which divides 256 evenly, so mapping random
//! bytes with a modulo introduces no bias.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Characters allowed in a share code
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of a generated share code
pub const CODE_LENGTH: usize = 8;

/// Errors from parsing a share code
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareCodeError {
    #[error("Share code must be {CODE_LENGTH} characters, got {0}")]
    InvalidLength(usize),

    #[error("Share code contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// An opaque, human-shareable code identifying a group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareCode(String);

impl ShareCode {
    /// Generates a new random share code
    ///
    /// Uniqueness is probabilistic here; the storage layer retries on the
    /// unlikely collision against an existing group.
    pub fn generate() -> Self {
        let entropy = Uuid::new_v4().into_bytes();
        let code = entropy[..CODE_LENGTH]
            .iter()
            .map(|b| ALPHABET[(b % 32) as usize] as char)
            .collect();
        Self(code)
    }

    /// Parses a code typed by a user
    ///
    /// Lowercase input is accepted and normalized to uppercase.
    pub fn parse(input: &str) -> Result<Self, ShareCodeError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.len() != CODE_LENGTH {
            return Err(ShareCodeError::InvalidLength(normalized.len()));
        }
        if let Some(bad) = normalized.chars().find(|c| !ALPHABET.contains(&(*c as u8))) {
            return Err(ShareCodeError::InvalidCharacter(bad));
        }
        Ok(Self(normalized))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShareCode {
    type Err = ShareCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
