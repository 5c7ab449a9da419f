//! Highlight targets for the viewport.
//!
//! A [`Highlight`] describes *what* should be emphasised wherever it appears
//! in an item: either a literal string or a regular expression. Matching is
//! always performed on the full, unwrapped text of an item so that a match
//! which straddles a wrap boundary is still found; the compositor then
//! intersects the match columns with each wrapped row.
//!
//! Patterns are compiled eagerly. An invalid pattern is reported through
//! [`HighlightError`] at the point it is set, never while rendering.

use regex::Regex;
use std::ops::Range;
use thiserror::Error;

/// Errors raised when configuring a highlight.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// The regular expression could not be compiled.
    #[error("invalid highlight pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern exactly as supplied by the caller.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Something to highlight in every rendered item.
///
/// # Examples
///
/// ```rust
/// use bubbletea_viewport::linebuffer::Highlight;
///
/// let literal = Highlight::literal("surf");
/// assert_eq!(literal.as_str(), "surf");
///
/// let pattern = Highlight::pattern(r"wave\w*").unwrap();
/// assert!(pattern.is_regex());
///
/// assert!(Highlight::pattern("(unclosed").is_err());
/// ```
#[derive(Debug, Clone)]
pub enum Highlight {
    /// Highlight every occurrence of this exact string.
    Literal(String),
    /// Highlight every non-empty match of this regular expression.
    Pattern(Regex),
}

impl Highlight {
    /// Creates a literal highlight.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compiles `pattern` into a regex highlight.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::InvalidPattern`] when the pattern does not
    /// compile.
    pub fn pattern(pattern: &str) -> Result<Self, HighlightError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|source| HighlightError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Returns the literal text or the source of the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Pattern(re) => re.as_str(),
        }
    }

    /// Whether this highlight is regex based.
    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    /// Whether this highlight can never produce a match.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Byte ranges of all non-empty, non-overlapping matches in `haystack`.
    pub(crate) fn find_byte_ranges(&self, haystack: &str) -> Vec<Range<usize>> {
        match self {
            Self::Literal(needle) if needle.is_empty() => Vec::new(),
            Self::Literal(needle) => haystack
                .match_indices(needle.as_str())
                .map(|(start, m)| start..start + m.len())
                .collect(),
            Self::Pattern(re) => re
                .find_iter(haystack)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect(),
        }
    }
}

impl From<&str> for Highlight {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Highlight {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}
