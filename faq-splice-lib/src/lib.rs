//! `faq-splice-lib` replaces the literal FAQ arrays of a front-end source
//! tree with externally supplied entries.
//!
//! A run loads one replacement payload, then for every target file in order
//! reads it, substitutes its `const faqs = [ ... ]` declaration with the
//! payload, and writes it back in place. Declarations are located textually
//! with a regular expression; nothing about the host file or the payload is
//! parsed or validated.
//!
//! # Example
//!
//! ```rust
//! use faq_splice_lib::marker::{SpliceMarker, Terminator};
//! use faq_splice_lib::payload::Payload;
//! use faq_splice_lib::splicer::splice;
//!
//! # fn demo() -> Result<(), faq_splice_lib::error::SpliceError> {
//! let marker = SpliceMarker::new("faqs", Terminator::Semicolon);
//! let spliced = splice(
//!     "const faqs = [ {a:1}, {b:2} ];",
//!     &marker,
//!     &Payload::from("{c:3}"),
//! )?;
//!
//! assert_eq!(spliced.content, "const faqs = [\n    {c:3}\n  ];");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod manifest;
pub mod marker;
pub mod payload;
pub mod report;
pub mod splicer;

use crate::error::SpliceError;
use crate::manifest::{Manifest, Target};
use crate::payload::Payload;
use crate::report::{SpliceReport, TargetOutcome};
use crate::splicer::splice_with;
use std::fs;
use std::path::{Path, PathBuf};

/// Message printed once a run has gone through every target.
pub const SUCCESS_MESSAGE: &str = "FAQ files updated successfully!";

/// Whether a run writes its results back to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Write,
    /// Compute every splice but leave the files untouched.
    Preview,
}

/// Splices one payload into every target of a [`Manifest`].
#[derive(Debug, Clone)]
pub struct FaqSplicer {
    root: PathBuf,
    manifest: Manifest,
    strict: bool,
}

impl FaqSplicer {
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            strict: false,
        }
    }

    /// Fail with [`SpliceError::PatternMismatch`] instead of rewriting a
    /// target whose declaration was not found.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Runs every target in manifest order.
    ///
    /// The payload is loaded before any target is touched. Targets are
    /// processed one at a time and the first failure stops the run; targets
    /// already written stay written. A target whose declaration does not
    /// match is rewritten with its original content unless the splicer is
    /// strict.
    pub fn run(&self, mode: RunMode) -> Result<SpliceReport, SpliceError> {
        let payload_path = self.root.join(&self.manifest.payload);
        let payload = Payload::load(&payload_path)?;

        let mut outcomes = Vec::with_capacity(self.manifest.targets.len());
        for target in &self.manifest.targets {
            outcomes.push(self.process_target(target, &payload, mode)?);
        }

        Ok(SpliceReport {
            payload: payload_path,
            written: mode == RunMode::Write,
            targets: outcomes,
        })
    }

    fn process_target(
        &self,
        target: &Target,
        payload: &Payload,
        mode: RunMode,
    ) -> Result<TargetOutcome, SpliceError> {
        let path = self.root.join(&target.path);
        log::debug!("Splicing `{}` in {}", target.marker.identifier, path.display());

        let original = fs::read_to_string(&path).map_err(|source| SpliceError::TargetRead {
            path: path.clone(),
            source,
        })?;

        let pattern = target.marker.compile()?;
        let spliced = splice_with(&original, &pattern, &target.marker.wrap(payload.as_str()));

        match spliced.replacements {
            0 => {
                if self.strict {
                    return Err(SpliceError::PatternMismatch {
                        path,
                        identifier: target.marker.identifier.clone(),
                    });
                }
                log::warn!(
                    "No `const {} = [...]` declaration found in {}; leaving it unchanged.",
                    target.marker.identifier,
                    path.display()
                );
            }
            1 => {}
            n => log::warn!(
                "Found {n} `const {} = [...]` declarations in {}; all were replaced.",
                target.marker.identifier,
                path.display()
            ),
        }

        if mode == RunMode::Write {
            write_in_place(&path, &spliced.content)?;
            log::info!("Wrote {}", path.display());
        }

        Ok(TargetOutcome {
            changed: spliced.content != original,
            replacements: spliced.replacements,
            path,
            original,
            content: spliced.content,
        })
    }
}

/// Overwrites `path` with `content`, keeping the file itself (and any
/// symlink leading to it) in place.
fn write_in_place(path: &Path, content: &str) -> Result<(), SpliceError> {
    fs::write(path, content).map_err(|source| SpliceError::TargetWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{SpliceMarker, Terminator};

    #[test]
    fn write_in_place_replaces_content() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("page.tsx");
        fs::write(&path, "old content that is longer").unwrap();

        write_in_place(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_in_place_into_missing_directory_fails() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("page.tsx");

        let err = write_in_place(&path, "new").unwrap_err();
        assert!(matches!(err, SpliceError::TargetWrite { .. }));
    }

    #[test]
    fn preview_leaves_files_untouched() {
        let dir = assert_fs::TempDir::new().unwrap();
        fs::write(dir.path().join("payload.txt"), "{c:3}\n").unwrap();
        fs::write(dir.path().join("page.tsx"), "const faqs = [{a:1}];").unwrap();

        let manifest = Manifest {
            payload: "payload.txt".into(),
            targets: vec![Target::new(
                "page.tsx",
                SpliceMarker::new("faqs", Terminator::Semicolon),
            )],
        };
        let report = FaqSplicer::new(dir.path(), manifest)
            .run(RunMode::Preview)
            .unwrap();

        assert!(!report.written);
        assert_eq!(report.targets[0].content, "const faqs = [\n    {c:3}\n  ];");
        assert_eq!(
            fs::read_to_string(dir.path().join("page.tsx")).unwrap(),
            "const faqs = [{a:1}];"
        );
    }
}
