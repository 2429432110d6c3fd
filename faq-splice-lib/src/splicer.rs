//! Contains the text substitution applied to each target document.

use crate::error::SpliceError;
use crate::marker::SpliceMarker;
use crate::payload::Payload;
use regex::{NoExpand, Regex};

/// Result of splicing a payload into one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub content: String,
    pub replacements: usize,
}

impl Spliced {
    pub fn matched(&self) -> bool {
        self.replacements > 0
    }
}

/// Replaces every declaration matched by `marker` with the wrapped payload.
///
/// A document without a matching declaration comes back unchanged with a
/// replacement count of zero.
pub fn splice(
    content: &str,
    marker: &SpliceMarker,
    payload: &Payload,
) -> Result<Spliced, SpliceError> {
    let regex = marker.compile()?;
    Ok(splice_with(content, &regex, &marker.wrap(payload.as_str())))
}

/// Like [`splice`] but with a pre-compiled pattern and a ready replacement.
///
/// The replacement is inserted literally; `$` sequences are not expanded.
pub fn splice_with(content: &str, pattern: &Regex, replacement: &str) -> Spliced {
    let replacements = pattern.find_iter(content).count();
    if replacements == 0 {
        return Spliced {
            content: content.to_string(),
            replacements,
        };
    }

    let content = pattern
        .replace_all(content, NoExpand(replacement))
        .into_owned();

    Spliced {
        content,
        replacements,
    }
}
