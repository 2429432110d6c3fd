//! Describes which files a run reads and rewrites.

use crate::error::SpliceError;
use crate::marker::{SpliceMarker, Terminator, DEFAULT_IDENTIFIER};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAYLOAD_PATH: &str = "temp_faq_replacement.txt";
pub const CONTACT_PAGE_PATH: &str = "components/pages/contact-content.tsx";
pub const FAQ_PAGE_PATH: &str = "app/faq/page.tsx";

/// A file whose FAQ declaration gets replaced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub path: PathBuf,
    #[serde(flatten)]
    pub marker: SpliceMarker,
}

impl Target {
    pub fn new(path: impl Into<PathBuf>, marker: SpliceMarker) -> Self {
        Self {
            path: path.into(),
            marker,
        }
    }
}

/// The payload location and the ordered list of targets.
///
/// Paths are relative to the directory the run is rooted at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_payload_path")]
    pub payload: PathBuf,
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,
}

fn default_payload_path() -> PathBuf {
    PathBuf::from(DEFAULT_PAYLOAD_PATH)
}

fn default_targets() -> Vec<Target> {
    vec![
        Target::new(
            CONTACT_PAGE_PATH,
            SpliceMarker::new(DEFAULT_IDENTIFIER, Terminator::Semicolon),
        ),
        Target::new(
            FAQ_PAGE_PATH,
            SpliceMarker::new(DEFAULT_IDENTIFIER, Terminator::None),
        ),
    ]
}

impl Default for Manifest {
    /// The contact page (terminated declaration) followed by the FAQ page
    /// (unterminated declaration).
    fn default() -> Self {
        Self {
            payload: default_payload_path(),
            targets: default_targets(),
        }
    }
}

impl Manifest {
    /// Reads a manifest from TOML (`.toml`) or YAML/JSON (anything else).
    pub fn load(path: &Path) -> Result<Self, SpliceError> {
        let data = fs::read_to_string(path).map_err(|source| SpliceError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            toml::from_str(&data).map_err(|err| err.to_string())
        } else {
            serde_yaml::from_str(&data).map_err(|err| err.to_string())
        };

        parsed.map_err(|message| SpliceError::ManifestParse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn with_payload(mut self, payload: impl Into<PathBuf>) -> Self {
        self.payload = payload.into();
        self
    }
}
