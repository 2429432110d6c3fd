//! Locates the literal array declaration that gets replaced in a target file.

use crate::error::SpliceError;
use regex::Regex;
use serde::Deserialize;

/// Identifier assigned the FAQ array in both front-end pages.
pub const DEFAULT_IDENTIFIER: &str = "faqs";

/// Statement terminator expected after the closing bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminator {
    /// `const faqs = [ ... ];`
    Semicolon,
    /// `const faqs = [ ... ]`
    #[default]
    None,
}

impl Terminator {
    fn as_str(self) -> &'static str {
        match self {
            Terminator::Semicolon => ";",
            Terminator::None => "",
        }
    }
}

/// Describes a `const <identifier> = [ {..}, {..} ]` declaration.
///
/// Records are matched as single-level brace groups: the first `}` inside a
/// record closes it. A record holding a nested object literal therefore
/// cannot be matched past its inner closing brace.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpliceMarker {
    #[serde(default = "default_identifier")]
    pub identifier: String,
    #[serde(default)]
    pub terminator: Terminator,
}

fn default_identifier() -> String {
    DEFAULT_IDENTIFIER.to_string()
}

impl Default for SpliceMarker {
    fn default() -> Self {
        Self {
            identifier: default_identifier(),
            terminator: Terminator::None,
        }
    }
}

impl SpliceMarker {
    pub fn new(identifier: impl Into<String>, terminator: Terminator) -> Self {
        Self {
            identifier: identifier.into(),
            terminator,
        }
    }

    /// Source text of the search pattern.
    pub fn pattern_source(&self) -> String {
        let terminator = self.terminator.as_str();
        format!(
            r"const {} = \[\s*\{{[^}}]*\}}(?:,\s*\{{[^}}]*\}})*\s*\]{terminator}",
            regex::escape(&self.identifier)
        )
    }

    pub fn compile(&self) -> Result<Regex, SpliceError> {
        Regex::new(&self.pattern_source()).map_err(|source| SpliceError::InvalidPattern {
            identifier: self.identifier.clone(),
            source,
        })
    }

    /// Re-wraps `payload` in the declaration syntax this marker matches.
    pub fn wrap(&self, payload: &str) -> String {
        format!(
            "const {} = [\n    {payload}\n  ]{}",
            self.identifier,
            self.terminator.as_str()
        )
    }
}
