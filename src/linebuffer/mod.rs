//! Measurable, sliceable lines of terminal text.
//!
//! A [`LineBuffer`] is the unit every item renders into. It knows its width
//! in terminal columns, can hand out column ranges of itself, and can wrap
//! itself into fixed-width chunks. All measurement works on grapheme clusters
//! so that wide characters (CJK, emoji) and combining marks are never split.
//!
//! Escape sequences in the input are removed on construction: styling is the
//! job of the viewport's roles, and stray escapes would throw off column
//! arithmetic.
//!
//! ```rust
//! use bubbletea_viewport::linebuffer::LineBuffer;
//!
//! let line = LineBuffer::new("hello 世界");
//! assert_eq!(line.width(), 10);
//! assert_eq!(line.slice(6, 10), "世界");
//!
//! let chunks = line.wrap(4);
//! let texts: Vec<&str> = chunks.iter().map(|c| c.content()).collect();
//! assert_eq!(texts, vec!["hell", "o 世", "界"]);
//! ```

mod highlight;

pub use highlight::{Highlight, HighlightError};

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const TAB_EXPANSION: &str = "    ";

/// Position of one grapheme cluster inside a [`LineBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grapheme {
    byte: usize,
    col: usize,
    width: usize,
}

/// One logical line of text, measured in terminal columns.
///
/// Line buffers are immutable. Operations that change the shape of a line
/// ([`wrap`](LineBuffer::wrap)) return new buffers; each wrapped chunk
/// remembers the column of the original line it starts at, which lets
/// callers map highlight matches found on the full line onto chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    content: String,
    graphemes: Vec<Grapheme>,
    width: usize,
    source_col: usize,
}

impl LineBuffer {
    /// Builds a line buffer from text.
    ///
    /// ANSI escape sequences are stripped and tabs are expanded to four
    /// spaces before the line is measured.
    pub fn new(text: &str) -> Self {
        let mut content = if text.contains('\x1b') {
            strip_ansi_escapes::strip_str(text)
        } else {
            text.to_string()
        };
        if content.contains('\t') {
            content = content.replace('\t', TAB_EXPANSION);
        }

        let mut graphemes = Vec::new();
        let mut col = 0;
        for (byte, g) in content.grapheme_indices(true) {
            let width = g.width();
            graphemes.push(Grapheme { byte, col, width });
            col += width;
        }

        Self {
            content,
            graphemes,
            width: col,
            source_col: 0,
        }
    }

    /// The text of the line, without escape sequences.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Width of the full line in terminal columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Width of the line once trailing whitespace is removed.
    pub fn trimmed_width(&self) -> usize {
        let trimmed_len = self.content.trim_end().len();
        let end = self.graphemes.partition_point(|g| g.byte < trimmed_len);
        self.col_of(end)
    }

    /// Whether the line holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Column of the original (unwrapped) line this buffer starts at.
    ///
    /// Zero for lines built with [`LineBuffer::new`].
    pub fn source_col(&self) -> usize {
        self.source_col
    }

    /// Returns the text between two columns.
    ///
    /// Both bounds are clamped to `[0, width()]`; a start past the end yields
    /// an empty string. Only grapheme clusters lying entirely inside the range
    /// are included, so a wide character cut by either bound is dropped.
    pub fn slice(&self, start_col: usize, end_col: usize) -> String {
        let end_col = end_col.min(self.width);
        let start_col = start_col.min(end_col);
        let lo = self.graphemes.partition_point(|g| g.col < start_col);
        let hi = self
            .graphemes
            .partition_point(|g| g.col + g.width <= end_col);
        if hi <= lo {
            return String::new();
        }
        self.content[self.byte_of(lo)..self.byte_of(hi)].to_string()
    }

    /// Splits the line into chunks of at most `chunk_width` columns.
    ///
    /// A line narrower than `chunk_width` is returned as is. Otherwise
    /// trailing whitespace is trimmed first, so the result never ends in a
    /// chunk made only of trailing blanks. The result always holds at least
    /// one chunk. A `chunk_width` of zero leaves the line untouched.
    ///
    /// Wrapping is pure: the same width always produces the same chunks.
    pub fn wrap(&self, chunk_width: usize) -> Vec<LineBuffer> {
        if chunk_width == 0 || self.width < chunk_width {
            return vec![self.clone()];
        }

        let trimmed_len = self.content.trim_end().len();
        let end = self.graphemes.partition_point(|g| g.byte < trimmed_len);

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut chunk_cols = 0;
        for (idx, g) in self.graphemes[..end].iter().enumerate() {
            if chunk_cols + g.width > chunk_width && idx > start {
                chunks.push(self.sub_buffer(start, idx));
                start = idx;
                chunk_cols = 0;
            }
            chunk_cols += g.width;
        }
        if start < end {
            chunks.push(self.sub_buffer(start, end));
        }
        if chunks.is_empty() {
            chunks.push(self.sub_buffer(0, 0));
        }
        chunks
    }

    /// Column ranges where `highlight` matches the text of this buffer.
    ///
    /// Ranges are expressed in this buffer's own columns. Call it on the
    /// unwrapped line and shift by each chunk's
    /// [`source_col`](LineBuffer::source_col) to place matches on wrapped
    /// rows.
    pub fn highlight_ranges(&self, highlight: &Highlight) -> Vec<Range<usize>> {
        highlight
            .find_byte_ranges(&self.content)
            .into_iter()
            .filter_map(|bytes| {
                let start = self.col_at_byte(bytes.start);
                let end = self.col_after_byte(bytes.end);
                (start < end).then_some(start..end)
            })
            .collect()
    }

    /// Iterates over `(column, text, width)` for each grapheme cluster.
    pub fn cells(&self) -> impl Iterator<Item = (usize, &str, usize)> + '_ {
        self.graphemes.iter().enumerate().map(move |(idx, g)| {
            let end = self.byte_of(idx + 1);
            (g.col, &self.content[g.byte..end], g.width)
        })
    }

    fn byte_of(&self, grapheme_idx: usize) -> usize {
        self.graphemes
            .get(grapheme_idx)
            .map_or(self.content.len(), |g| g.byte)
    }

    fn col_of(&self, grapheme_idx: usize) -> usize {
        self.graphemes
            .get(grapheme_idx)
            .map_or(self.width, |g| g.col)
    }

    // column of the grapheme containing `byte`
    fn col_at_byte(&self, byte: usize) -> usize {
        if byte >= self.content.len() {
            return self.width;
        }
        let idx = self.graphemes.partition_point(|g| g.byte <= byte);
        self.col_of(idx.saturating_sub(1))
    }

    // first column at or after the grapheme boundary following `byte`
    fn col_after_byte(&self, byte: usize) -> usize {
        let idx = self.graphemes.partition_point(|g| g.byte < byte);
        self.col_of(idx)
    }

    fn sub_buffer(&self, start: usize, end: usize) -> LineBuffer {
        let byte_start = self.byte_of(start);
        let byte_end = self.byte_of(end);
        let col_start = self.col_of(start);
        let graphemes: Vec<Grapheme> = self.graphemes[start..end]
            .iter()
            .map(|g| Grapheme {
                byte: g.byte - byte_start,
                col: g.col - col_start,
                width: g.width,
            })
            .collect();
        let width = graphemes.iter().map(|g| g.width).sum();
        LineBuffer {
            content: self.content[byte_start..byte_end].to_string(),
            graphemes,
            width,
            source_col: self.source_col + col_start,
        }
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for LineBuffer {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}
