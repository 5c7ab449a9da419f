//! Frame composition.
//!
//! A frame is built in two passes. [`Model::frame`] lays out exactly
//! `height` lines of exactly `width` columns, each split into spans tagged
//! with a [`Role`]; [`Model::render_styled`] then runs every span through its
//! lipgloss style. Keeping the passes apart lets tests assert on layout
//! without parsing escape sequences.

use super::{Model, Renderable, Role};
use crate::linebuffer::LineBuffer;
use std::ops::Range;

/// A run of text sharing one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// The text, free of escape sequences.
    pub text: String,
    /// What the text represents.
    pub role: Role,
}

/// One rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLine {
    /// Spans in display order.
    pub spans: Vec<Span>,
}

impl FrameLine {
    /// The plain text of the line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, role: Role) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.role == role => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                role,
            }),
        }
    }

    fn pad(&mut self, cols: usize, role: Role) {
        if cols > 0 {
            self.push(&" ".repeat(cols), role);
        }
    }
}

/// A complete rendered viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Lines from top to bottom.
    pub rows: Vec<FrameLine>,
}

impl Frame {
    /// Plain text of every line.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(FrameLine::text).collect()
    }
}

// a grapheme placed at a column of the output line
struct Cell<'a> {
    pos: usize,
    text: &'a str,
    width: usize,
    role: Role,
}

impl<T: Renderable> Model<T> {
    /// Lays out the current view.
    ///
    /// The frame always has `height()` lines, each exactly `width()` columns
    /// wide.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::{Model, Role};
    ///
    /// let mut viewport = Model::new(12, 3);
    /// viewport.set_header(vec!["Title".to_string()]);
    /// viewport.set_items(vec!["a long line of text".to_string()]);
    ///
    /// let frame = viewport.frame();
    /// assert_eq!(frame.lines(), vec!["Title       ", "a long li...", "            "]);
    /// assert_eq!(frame.rows[0].spans[0].role, Role::Header);
    /// ```
    pub fn frame(&self) -> Frame {
        let mut rows = Vec::with_capacity(self.height);

        for line in self.lines.header().iter().take(self.height) {
            rows.push(self.compose_line(line, &[], Role::Header));
        }

        let end = (self.y_offset + self.content_height).min(self.lines.total_rows());
        for row in self.y_offset..end {
            let Some((item, line)) = self.lines.row(row) else {
                break;
            };
            let role = if self.selection_enabled && item == self.selected_idx() {
                Role::Selected
            } else {
                Role::Content
            };
            let highlights = self.row_highlights(item, line);
            rows.push(self.compose_line(line, &highlights, role));
        }

        let footer = self.footer_line();
        let reserved = usize::from(footer.is_some());
        while rows.len() + reserved < self.height {
            let mut blank = FrameLine::default();
            blank.pad(self.width, Role::Content);
            rows.push(blank);
        }
        rows.extend(footer);
        rows.truncate(self.height);

        Frame { rows }
    }

    /// The footer text, e.g. `"50% (3/6)"`, or `None` when it is hidden.
    ///
    /// With selection on it reports the selected item out of all items;
    /// otherwise the last visible row out of all rows.
    pub fn footer_text(&self) -> Option<String> {
        if !self.footer_visible() {
            return None;
        }
        let (numerator, denominator) = if self.selection_enabled {
            (self.selected_idx() + 1, self.content.len())
        } else {
            (
                self.y_offset + self.content_height,
                self.lines.total_rows(),
            )
        };
        let percent = if denominator == 0 {
            0
        } else {
            numerator * 100 / denominator
        };
        Some(format!("{percent}% ({numerator}/{denominator})"))
    }

    /// Applies [`Model::styles`] to a frame.
    pub(super) fn render_styled(&self, frame: &Frame) -> String {
        frame
            .rows
            .iter()
            .map(|row| {
                row.spans
                    .iter()
                    .map(|span| {
                        self.styles
                            .style_for(span.role)
                            .clone()
                            .inline(true)
                            .render(&span.text)
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn footer_line(&self) -> Option<FrameLine> {
        let text = LineBuffer::new(&self.footer_text()?);
        let mut line = FrameLine::default();
        line.push(&text.slice(0, self.width), Role::Footer);
        line.pad(self.width.saturating_sub(text.width()), Role::Footer);
        Some(line)
    }

    // highlight matches on the full item, clipped to this row
    fn row_highlights(&self, item: usize, row: &LineBuffer) -> Vec<Range<usize>> {
        let (Some(highlight), Some(full)) = (&self.highlight, self.lines.item_line(item)) else {
            return Vec::new();
        };
        let lo = row.source_col();
        let hi = lo + row.width();
        full.highlight_ranges(highlight)
            .into_iter()
            .filter_map(|m| {
                let start = m.start.max(lo);
                let end = m.end.min(hi);
                (start < end).then(|| start - lo..end - lo)
            })
            .collect()
    }

    /// Cuts columns `[x_offset, x_offset + width)` out of `line`, marks
    /// clipped edges with the continuation indicator and pads to `width`.
    ///
    /// The right edge is marked when the right-trimmed line runs past the
    /// window; the left edge is marked whenever the view is panned.
    fn compose_line(&self, line: &LineBuffer, highlights: &[Range<usize>], base: Role) -> FrameLine {
        let x = self.x_offset;
        let width = self.width;
        let trimmed = line.trimmed_width();
        let indicator = LineBuffer::new(&self.config.continuation_indicator);
        let indicator_width = indicator.width();

        let mut cells: Vec<Cell> = line
            .cells()
            .filter(|&(col, _, w)| col >= x && col + w <= x + width)
            .map(|(col, text, w)| Cell {
                pos: col - x,
                text,
                width: w,
                role: if highlights.iter().any(|r| r.contains(&col)) {
                    Role::Highlight
                } else {
                    base
                },
            })
            .collect();

        let marker = |offset: usize| {
            indicator
                .cells()
                .filter(move |&(col, _, w)| offset + col + w <= width)
                .map(move |(col, text, w)| Cell {
                    pos: offset + col,
                    text,
                    width: w,
                    role: base,
                })
        };

        if x + width < trimmed {
            let start = width.saturating_sub(indicator_width);
            cells.retain(|c| c.pos + c.width <= start);
            cells.extend(marker(start));
        }
        if x > 0 {
            cells.retain(|c| c.pos >= indicator_width);
            cells.extend(marker(0));
            cells.sort_by_key(|c| c.pos);
        }

        let mut out = FrameLine::default();
        let mut col = 0;
        for cell in &cells {
            out.pad(cell.pos - col, base);
            out.push(cell.text, cell.role);
            col = cell.pos + cell.width;
        }
        out.pad(width - col, base);
        out
    }
}
