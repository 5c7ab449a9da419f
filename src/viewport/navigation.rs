//! Vertical scrolling, selection movement and horizontal panning.

use super::{Model, Renderable};

impl<T: Renderable> Model<T> {
    /// Largest valid vertical offset. Zero when no content rows fit.
    pub fn max_y_offset(&self) -> usize {
        if self.content_height == 0 {
            return 0;
        }
        self.lines.total_rows().saturating_sub(self.content_height)
    }

    /// Largest valid horizontal offset for the lines currently on screen.
    pub fn max_x_offset(&self) -> usize {
        self.max_line_length.saturating_sub(self.width)
    }

    /// Whether the first content row is shown.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Whether the last content row is shown.
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Moves the view so row `n` is at the top, clamped to the content.
    pub fn set_y_offset(&mut self, n: usize) {
        self.y_offset = n.min(self.max_y_offset());
        self.sync_window();
    }

    /// Scrolls the view up by `n` rows.
    pub fn scroll_up(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_sub(n));
    }

    /// Scrolls the view down by `n` rows.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    ///
    /// let mut viewport = Model::new(20, 5);
    /// viewport.set_footer_enabled(false);
    /// viewport.set_items((0..8).map(|i| i.to_string()).collect());
    ///
    /// viewport.scroll_down(100);
    /// assert_eq!(viewport.y_offset(), 3);
    /// assert!(viewport.at_bottom());
    /// ```
    pub fn scroll_down(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_add(n));
    }

    /// Moves the selection up by `n` items and scrolls it into view.
    ///
    /// Does nothing while selection is disabled.
    pub fn select_up(&mut self, n: usize) {
        if !self.selection_enabled {
            return;
        }
        self.set_selected_idx(self.selected_idx().saturating_sub(n));
    }

    /// Moves the selection down by `n` items and scrolls it into view.
    ///
    /// Does nothing while selection is disabled.
    pub fn select_down(&mut self, n: usize) {
        if !self.selection_enabled {
            return;
        }
        self.set_selected_idx(self.selected_idx().saturating_add(n));
    }

    /// Scrolls up half a screen. With selection on, the selection moves up
    /// by about the number of items that fit in half a screen.
    pub fn half_page_up(&mut self) {
        let rows = self.content_height / 2;
        self.page_up_by(rows);
    }

    /// Scrolls down half a screen. With selection on, the selection moves
    /// down by about the number of items that fit in half a screen.
    pub fn half_page_down(&mut self) {
        let rows = self.content_height / 2;
        self.page_down_by(rows);
    }

    /// Scrolls up one screen.
    pub fn page_up(&mut self) {
        self.page_up_by(self.content_height);
    }

    /// Scrolls down one screen.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    ///
    /// let mut viewport = Model::new(20, 4);
    /// viewport.set_footer_enabled(false);
    /// viewport.set_selection_enabled(true);
    /// viewport.set_items((0..20).map(|i| i.to_string()).collect());
    ///
    /// viewport.page_down();
    /// assert_eq!(viewport.y_offset(), 4);
    /// assert_eq!(viewport.selected_idx(), 4);
    /// ```
    pub fn page_down(&mut self) {
        self.page_down_by(self.content_height);
    }

    /// Jumps to the top. With selection on, selects the first item.
    pub fn goto_top(&mut self) {
        if self.selection_enabled {
            self.set_selected_idx(0);
        }
        self.set_y_offset(0);
    }

    /// Jumps to the bottom. With selection on, selects the last item.
    pub fn goto_bottom(&mut self) {
        if self.selection_enabled {
            self.set_selected_idx(self.content.len().saturating_sub(1));
        } else {
            self.set_y_offset(self.max_y_offset());
        }
    }

    /// Sets the horizontal offset, clamped so the widest visible line still
    /// ends inside the view. Ignored while wrapping.
    pub fn set_x_offset(&mut self, n: usize) {
        if self.config.wrap_text {
            return;
        }
        self.x_offset = n.min(self.max_x_offset());
    }

    /// Pans `n` columns to the left.
    pub fn pan_left(&mut self, n: usize) {
        self.set_x_offset(self.x_offset.saturating_sub(n));
    }

    /// Pans `n` columns to the right.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    ///
    /// let mut viewport = Model::new(10, 3);
    /// viewport.set_items(vec!["0123456789abcdef".to_string()]);
    ///
    /// viewport.pan_right(4);
    /// assert_eq!(viewport.x_offset(), 4);
    /// viewport.pan_right(100);
    /// assert_eq!(viewport.x_offset(), 6);
    /// ```
    pub fn pan_right(&mut self, n: usize) {
        self.set_x_offset(self.x_offset.saturating_add(n));
    }

    /// Scrolls back to the first column.
    pub fn reset_x_offset(&mut self) {
        self.x_offset = 0;
    }

    fn page_up_by(&mut self, rows: usize) {
        let items = self.lines.items_in_rows(self.y_offset, rows).max(1);
        self.scroll_up(rows);
        if self.selection_enabled {
            self.select_up(items);
        }
    }

    fn page_down_by(&mut self, rows: usize) {
        let items = self.lines.items_in_rows(self.y_offset, rows).max(1);
        self.scroll_down(rows);
        if self.selection_enabled {
            self.select_down(items);
        }
    }

    /// Scrolls the minimum amount needed to show the selected item.
    ///
    /// An item taller than the content area is aligned to its first row.
    pub(super) fn ensure_selection_visible(&mut self) {
        if self.content.is_empty() || self.content_height == 0 {
            return;
        }
        let selected = self.selected_idx();
        let first = self.lines.item_first_row(selected);
        let end = first + self.lines.item_row_span(selected);

        if first < self.y_offset {
            self.y_offset = first;
        } else if end > self.y_offset + self.content_height {
            self.y_offset = if end - first > self.content_height {
                first
            } else {
                end - self.content_height
            };
        }
        self.y_offset = self.y_offset.min(self.max_y_offset());
        self.sync_window();
    }
}
