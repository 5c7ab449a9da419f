//! Mapping between items and display rows.
//!
//! Every item occupies one display row, or several when wrapping is on.
//! [`LineMap`] keeps two layers of bookkeeping:
//!
//! * row extents covering *all* items, so the total row count, scroll limits
//!   and footer are exact;
//! * a materialized window holding the actual rendered rows around the
//!   current offset, plus the row/item lookup tables for that range.
//!
//! The window reaches one screen beyond the visible rows in each direction
//! and is only rebuilt when scrolling leaves it.

use super::Renderable;
use crate::linebuffer::LineBuffer;

/// Number of rows every item occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowExtents {
    /// One row per item.
    Uniform { items: usize },
    /// Prefix sums of row spans; `first_rows[i]` is the first row of item
    /// `i` and the last entry is the total row count.
    Wrapped { first_rows: Vec<usize> },
}

impl Default for RowExtents {
    fn default() -> Self {
        Self::Uniform { items: 0 }
    }
}

impl RowExtents {
    fn items(&self) -> usize {
        match self {
            Self::Uniform { items } => *items,
            Self::Wrapped { first_rows } => first_rows.len().saturating_sub(1),
        }
    }

    fn total_rows(&self) -> usize {
        match self {
            Self::Uniform { items } => *items,
            Self::Wrapped { first_rows } => first_rows.last().copied().unwrap_or(0),
        }
    }

    fn first_row(&self, item: usize) -> usize {
        match self {
            Self::Uniform { items } => item.min(*items),
            Self::Wrapped { first_rows } => first_rows
                .get(item)
                .or(first_rows.last())
                .copied()
                .unwrap_or(0),
        }
    }

    fn span(&self, item: usize) -> usize {
        if item >= self.items() {
            return 0;
        }
        match self {
            Self::Uniform { .. } => 1,
            Self::Wrapped { first_rows } => first_rows[item + 1] - first_rows[item],
        }
    }

    fn item_at_row(&self, row: usize) -> Option<usize> {
        if row >= self.total_rows() {
            return None;
        }
        match self {
            Self::Uniform { .. } => Some(row),
            Self::Wrapped { first_rows } => {
                Some(first_rows.partition_point(|&first| first <= row) - 1)
            }
        }
    }
}

/// Rendered rows for a contiguous range of items.
#[derive(Debug, Clone, Default)]
struct Window {
    start_item: usize,
    first_row: usize,
    rows: Vec<LineBuffer>,
    row_to_item: Vec<usize>,
    item_first_row: Vec<usize>,
    item_row_span: Vec<usize>,
    // unwrapped render of each item, used for highlight matching
    item_lines: Vec<LineBuffer>,
}

impl Window {
    fn end_row(&self) -> usize {
        self.first_row + self.rows.len()
    }

    fn covers(&self, start_row: usize, end_row: usize) -> bool {
        start_row >= self.first_row && end_row <= self.end_row()
    }

    fn local_item(&self, item: usize) -> Option<usize> {
        item.checked_sub(self.start_item)
            .filter(|&local| local < self.item_lines.len())
    }
}

/// Row layout of the header and items for one width and wrap mode.
#[derive(Debug, Clone, Default)]
pub(crate) struct LineMap {
    header: Vec<LineBuffer>,
    extents: RowExtents,
    window: Option<Window>,
    width: usize,
    wrap: bool,
}

impl LineMap {
    /// Recomputes header rows and item extents. Drops the window.
    pub(crate) fn rebuild<T: Renderable>(
        &mut self,
        items: &[T],
        header: &[String],
        width: usize,
        wrap: bool,
    ) {
        self.width = width;
        self.wrap = wrap;
        self.header = header
            .iter()
            .flat_map(|line| self.layout(LineBuffer::new(line)))
            .collect();

        self.extents = if wrap {
            let mut first_rows = Vec::with_capacity(items.len() + 1);
            let mut total = 0;
            first_rows.push(0);
            for item in items {
                total += self.layout(item.render()).len();
                first_rows.push(total);
            }
            RowExtents::Wrapped { first_rows }
        } else {
            RowExtents::Uniform { items: items.len() }
        };
        self.window = None;

        tracing::debug!(
            items = items.len(),
            header_rows = self.header.len(),
            total_rows = self.extents.total_rows(),
            width,
            wrap,
            "rebuilt row extents"
        );
    }

    /// Makes sure rows `[top_row, top_row + height)` are materialized.
    pub(crate) fn ensure_materialized<T: Renderable>(
        &mut self,
        items: &[T],
        top_row: usize,
        height: usize,
    ) {
        let total = self.extents.total_rows();
        let start = top_row.min(total);
        let end = (top_row + height).min(total);
        if self.window.as_ref().is_some_and(|w| w.covers(start, end)) {
            return;
        }
        self.materialize(items, top_row, height);
    }

    /// Renders the rows around `top_row` into a fresh window.
    pub(crate) fn materialize<T: Renderable>(&mut self, items: &[T], top_row: usize, height: usize) {
        let total = self.extents.total_rows();
        let slack = height.max(1);
        let from_row = top_row.saturating_sub(slack).min(total);
        let to_row = (top_row + height + slack).min(total);

        let mut window = Window {
            first_row: from_row,
            ..Window::default()
        };
        let range = if from_row < to_row {
            self.extents
                .item_at_row(from_row)
                .zip(self.extents.item_at_row(to_row - 1))
        } else {
            None
        };

        if let Some((start_item, last_item)) = range {
            window.start_item = start_item;
            window.first_row = self.extents.first_row(start_item);
            for (idx, item) in items
                .iter()
                .enumerate()
                .take(last_item + 1)
                .skip(start_item)
            {
                let line = item.render();
                let chunks = self.layout(line.clone());
                debug_assert_eq!(chunks.len(), self.extents.span(idx));
                let first_row = window.end_row();
                window.item_first_row.push(first_row);
                window.item_row_span.push(chunks.len());
                for chunk in chunks {
                    window.row_to_item.push(idx);
                    window.rows.push(chunk);
                }
                window.item_lines.push(line);
            }
        }

        tracing::debug!(
            top_row,
            first_row = window.first_row,
            rows = window.rows.len(),
            "materialized window"
        );
        self.window = Some(window);
    }

    /// Header rows after wrapping.
    pub(crate) fn header(&self) -> &[LineBuffer] {
        &self.header
    }

    /// Total display rows across all items.
    pub(crate) fn total_rows(&self) -> usize {
        self.extents.total_rows()
    }

    /// First display row of `item`.
    pub(crate) fn item_first_row(&self, item: usize) -> usize {
        if let Some(w) = &self.window {
            if let Some(local) = w.local_item(item) {
                return w.item_first_row[local];
            }
        }
        self.extents.first_row(item)
    }

    /// Number of display rows `item` occupies.
    pub(crate) fn item_row_span(&self, item: usize) -> usize {
        if let Some(w) = &self.window {
            if let Some(local) = w.local_item(item) {
                return w.item_row_span[local];
            }
        }
        self.extents.span(item)
    }

    /// Item shown on display row `row`.
    pub(crate) fn item_at_row(&self, row: usize) -> Option<usize> {
        self.extents.item_at_row(row)
    }

    /// The materialized display row `row` and the item it belongs to.
    pub(crate) fn row(&self, row: usize) -> Option<(usize, &LineBuffer)> {
        let w = self.window.as_ref()?;
        let local = row.checked_sub(w.first_row)?;
        Some((*w.row_to_item.get(local)?, w.rows.get(local)?))
    }

    /// Unwrapped render of a materialized item.
    pub(crate) fn item_line(&self, item: usize) -> Option<&LineBuffer> {
        let w = self.window.as_ref()?;
        w.local_item(item).map(|local| &w.item_lines[local])
    }

    /// How many items start within `budget` rows from `start_row`.
    ///
    /// Always counts the item under `start_row`, even when it alone exceeds
    /// the budget. Zero only when `start_row` is past the content.
    pub(crate) fn items_in_rows(&self, start_row: usize, budget: usize) -> usize {
        let Some(mut item) = self.item_at_row(start_row) else {
            return 0;
        };
        let total_items = self.extents.items();
        let mut rows = 0;
        let mut count = 0;
        while item < total_items && (count == 0 || rows < budget) {
            rows += self.item_row_span(item);
            item += 1;
            count += 1;
        }
        count
    }

    /// Widest line among the header and rows `[top_row, top_row + height)`.
    pub(crate) fn max_line_width(&self, top_row: usize, height: usize) -> usize {
        let header = self.header.iter().map(LineBuffer::width).max().unwrap_or(0);
        let rows = (top_row..top_row + height)
            .map_while(|row| self.row(row))
            .map(|(_, line)| line.width())
            .max()
            .unwrap_or(0);
        header.max(rows)
    }

    fn layout(&self, line: LineBuffer) -> Vec<LineBuffer> {
        if self.wrap {
            line.wrap(self.width)
        } else {
            vec![line]
        }
    }
}
