//! Segment sanitization for organizer identifiers
//!
//! A location segment becomes part of an organizer id, so every character
//! outside the legal set is replaced one-for-one by a substitution character.
//! `-` and `/` are both illegal: a sanitized segment can never be split again
//! or carry a rack-slot suffix.

use anyhow::bail;

/// Substitution character used when none is configured
pub const DEFAULT_SUBCHAR: char = '_';

/// Rewrites one path segment into legal identifier characters.
///
/// Implementations must be deterministic and idempotent, and must only
/// substitute characters (never split, drop, or reorder them). An `Err`
/// aborts the whole normalization.
pub trait SegmentSanitizer: Send + Sync {
    fn sanitize(&self, segment: &str) -> anyhow::Result<String>;
}

/// Returns true if `c` may appear in an organizer id segment
#[inline]
pub fn is_legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | '.' | '$' | '(' | ')' | '~' | '#' | '@')
}

/// Default sanitizer, equivalent to the platform's `prepId`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepId {
    subchar: char,
}

impl Default for PrepId {
    fn default() -> Self {
        Self { subchar: DEFAULT_SUBCHAR }
    }
}

impl PrepId {
    /// Create a sanitizer with a custom substitution character
    ///
    /// Fails if `subchar` is itself illegal, since the output would then
    /// not be stable under a second pass.
    pub fn new(subchar: char) -> anyhow::Result<Self> {
        if !is_legal_char(subchar) {
            bail!("substitution character {:?} is not a legal identifier character", subchar);
        }
        Ok(Self { subchar })
    }

    pub fn subchar(&self) -> char {
        self.subchar
    }

    pub fn prep(&self, segment: &str) -> String {
        segment.chars().map(|c| if is_legal_char(c) { c } else { self.subchar }).collect()
    }
}

impl SegmentSanitizer for PrepId {
    fn sanitize(&self, segment: &str) -> anyhow::Result<String> {
        Ok(self.prep(segment))
    }
}
