//! Loads the replacement payload spliced into every target.

use crate::error::SpliceError;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Opaque replacement text. Leading and trailing whitespace is stripped;
/// nothing else about its shape is checked.
///
/// Whitespace follows `char::is_whitespace`, so the ASCII separators
/// U+001C..U+001F are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn load(path: &Path) -> Result<Self, SpliceError> {
        let raw = fs::read_to_string(path).map_err(|source| SpliceError::PayloadRead {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded {} bytes of payload from {}", raw.len(), path.display());
        Ok(Self::from(raw.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Payload {
    fn from(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }
}

impl FromStr for Payload {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(raw))
    }
}
