//! Defines custom error types for the library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a splice run fails.
pub enum SpliceError {
    #[error("Failed to read replacement payload: {}", path.display())]
    PayloadRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read target file: {}", path.display())]
    TargetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write target file: {}", path.display())]
    TargetWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read manifest: {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("Invalid declaration pattern for identifier '{identifier}'")]
    InvalidPattern {
        identifier: String,
        #[source]
        source: regex::Error,
    },

    #[error("Declaration `const {identifier} = [...]` was not found in {}", path.display())]
    PatternMismatch { path: PathBuf, identifier: String },
}
