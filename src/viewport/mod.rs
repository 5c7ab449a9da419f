//! Scrollable, selectable viewport over a list of renderable items.
//!
//! The viewport shows a window of `height` rows and `width` columns onto an
//! arbitrarily long list of items. Each item renders into a
//! [`LineBuffer`](crate::linebuffer::LineBuffer); long lines are either
//! truncated with a continuation indicator and panned horizontally, or
//! wrapped onto several display rows.
//!
//! Layout of a rendered frame, top to bottom:
//!
//! * header rows (fixed, never scrolled vertically);
//! * up to `content_height()` rows of items, starting at `y_offset()`;
//! * blank padding;
//! * an optional footer such as `50% (3/6)` when the content overflows.
//!
//! # Quick Start
//!
//! ```rust
//! use bubbletea_viewport::viewport::Model;
//!
//! let mut viewport = Model::new(20, 4);
//! viewport.set_items((1..=10).map(|i| format!("item {i}")).collect());
//! viewport.set_selection_enabled(true);
//! viewport.select_down(2);
//!
//! assert_eq!(viewport.selected_idx(), 2);
//! assert_eq!(viewport.selected_item().map(String::as_str), Some("item 3"));
//!
//! let lines = viewport.frame().lines();
//! assert_eq!(lines.len(), 4);
//! assert_eq!(lines[3].trim_end(), "30% (3/10)");
//! ```
//!
//! # Integration with Bubble Tea
//!
//! ```rust
//! use bubbletea_viewport::viewport::Model as ViewportModel;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct Pager {
//!     viewport: ViewportModel<String>,
//! }
//!
//! impl BubbleTeaModel for Pager {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut viewport = ViewportModel::new(80, 20);
//!         viewport.set_items(vec!["first".to_string(), "second".to_string()]);
//!         (Self { viewport }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.viewport.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.viewport.view()
//!     }
//! }
//! ```
//!
//! # Navigation Controls
//!
//! | Keys | Selection on | Selection off |
//! |------|--------------|---------------|
//! | `↑`/`k`, `↓`/`j` | Move selection | Scroll one row |
//! | `←`/`h`, `→`/`l` | Pan (no wrap) | Pan (no wrap) |
//! | `PgUp`/`b`, `PgDn`/`f`/space | Page, selection follows | Page |
//! | `u`/`ctrl+u`, `d`/`ctrl+d` | Half page, selection follows | Half page |
//! | `g`/`Home`, `G`/`End` | First or last item | Top or bottom |

mod config;
mod content;
mod keys;
mod lines;
mod navigation;
mod rendering;
mod style;

#[cfg(test)]
mod tests;

pub use config::{Configuration, DEFAULT_CONTINUATION_INDICATOR};
pub use content::{CompareFn, ContentManager};
pub use keys::ViewportKeyMap;
pub use rendering::{Frame, FrameLine, Span};
pub use style::{Role, ViewportStyles};

use crate::linebuffer::{Highlight, HighlightError, LineBuffer};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lines::LineMap;

/// Anything that can be shown as one logical line of the viewport.
///
/// Rendering must be pure: the viewport may render the same item several
/// times and relies on getting the same line back.
///
/// ```rust
/// use bubbletea_viewport::linebuffer::LineBuffer;
/// use bubbletea_viewport::viewport::{Model, Renderable};
///
/// #[derive(Clone)]
/// struct LogEntry {
///     level: &'static str,
///     message: String,
/// }
///
/// impl Renderable for LogEntry {
///     fn render(&self) -> LineBuffer {
///         LineBuffer::new(&format!("[{}] {}", self.level, self.message))
///     }
/// }
///
/// let mut viewport = Model::new(30, 3);
/// viewport.set_items(vec![LogEntry { level: "INFO", message: "started".into() }]);
/// assert_eq!(viewport.frame().lines()[0].trim_end(), "[INFO] started");
/// ```
pub trait Renderable {
    /// Produces the line for this item.
    fn render(&self) -> LineBuffer;
}

impl Renderable for String {
    fn render(&self) -> LineBuffer {
        LineBuffer::new(self)
    }
}

impl Renderable for &str {
    fn render(&self) -> LineBuffer {
        LineBuffer::new(self)
    }
}

impl Renderable for LineBuffer {
    fn render(&self) -> LineBuffer {
        self.clone()
    }
}

/// A viewport over items of type `T`.
///
/// All setters keep the viewport consistent: offsets are clamped to the new
/// content, and while selection is enabled the selected item is scrolled
/// into view. Rendering is available as a role-tagged [`Frame`]
/// ([`Model::frame`]) or as a styled string through the Bubble Tea
/// [`view`](BubbleTeaModel::view).
#[derive(Debug)]
pub struct Model<T: Renderable> {
    /// Key bindings used by [`Model::handle_key`].
    pub keymap: ViewportKeyMap,
    /// Styles applied to each [`Role`] by `view`.
    pub styles: ViewportStyles,

    config: Configuration,
    content: ContentManager<T>,
    highlight: Option<Highlight>,
    selection_enabled: bool,
    width: usize,
    height: usize,
    content_height: usize,
    lines: LineMap,
    y_offset: usize,
    x_offset: usize,
    max_line_length: usize,
}

impl<T: Renderable + Clone> Clone for Model<T> {
    fn clone(&self) -> Self {
        Self {
            keymap: self.keymap.clone(),
            styles: self.styles.clone(),
            config: self.config.clone(),
            content: self.content.clone(),
            highlight: self.highlight.clone(),
            selection_enabled: self.selection_enabled,
            width: self.width,
            height: self.height,
            content_height: self.content_height,
            lines: self.lines.clone(),
            y_offset: self.y_offset,
            x_offset: self.x_offset,
            max_line_length: self.max_line_length,
        }
    }
}

impl<T: Renderable> Default for Model<T> {
    /// An 80x24 viewport with no items.
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl<T: Renderable> Model<T> {
    /// Creates an empty viewport of the given size.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    ///
    /// let viewport: Model<String> = Model::new(40, 10);
    /// assert_eq!(viewport.width(), 40);
    /// assert_eq!(viewport.content_height(), 10);
    /// assert!(viewport.items().is_empty());
    /// ```
    pub fn new(width: usize, height: usize) -> Self {
        let mut viewport = Self {
            keymap: ViewportKeyMap::default(),
            styles: ViewportStyles::default(),
            config: Configuration::default(),
            content: ContentManager::new(),
            highlight: None,
            selection_enabled: false,
            width,
            height,
            content_height: 0,
            lines: LineMap::default(),
            y_offset: 0,
            x_offset: 0,
            max_line_length: 0,
        };
        viewport.refresh();
        viewport
    }

    /// Builder applying a [`Configuration`].
    pub fn with_config(mut self, config: Configuration) -> Self {
        self.set_config(config);
        self
    }

    /// Builder replacing the styles.
    pub fn with_styles(mut self, styles: ViewportStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Builder installing a selection comparator. See
    /// [`Model::set_compare_fn`].
    pub fn with_compare_fn<F>(mut self, compare: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.content.set_compare_fn(compare);
        self
    }

    // --- content ---

    /// The current items.
    pub fn items(&self) -> &[T] {
        self.content.items()
    }

    /// Replaces the items.
    ///
    /// With a comparator installed the selection follows the previously
    /// selected item to its new position; otherwise the index is clamped.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.content.set_items(items);
        tracing::debug!(items = self.content.len(), "set viewport items");
        self.refresh();
    }

    /// Header lines shown above the items.
    pub fn header(&self) -> &[String] {
        self.content.header()
    }

    /// Replaces the header. Header rows wrap with the content and reduce
    /// the rows available to items.
    pub fn set_header(&mut self, header: Vec<String>) {
        self.content.set_header(header);
        self.refresh();
    }

    /// Installs the comparator used by [`Model::set_items`] to keep the
    /// selection on the same logical item.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    ///
    /// let mut viewport = Model::new(20, 5);
    /// viewport.set_compare_fn(|a: &String, b: &String| a == b);
    /// viewport.set_selection_enabled(true);
    /// viewport.set_items(vec!["a".into(), "b".into(), "c".into()]);
    /// viewport.set_selected_idx(0);
    ///
    /// viewport.set_items(vec!["x".into(), "y".into(), "a".into()]);
    /// assert_eq!(viewport.selected_idx(), 2);
    /// ```
    pub fn set_compare_fn<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.content.set_compare_fn(compare);
    }

    /// Removes the selection comparator.
    pub fn clear_compare_fn(&mut self) {
        self.content.clear_compare_fn();
    }

    // --- selection ---

    /// Whether up and down move a selection instead of scrolling.
    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Turns selection mode on or off. Turning it on scrolls the selected
    /// item into view.
    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
        self.refresh();
    }

    /// Index of the selected item. Meaningful only while selection is on.
    pub fn selected_idx(&self) -> usize {
        self.content.selected_idx()
    }

    /// The selected item, or `None` when there are no items.
    pub fn selected_item(&self) -> Option<&T> {
        self.content.selected_item()
    }

    /// Selects `idx` (clamped) and, while selection is on, scrolls it into
    /// view.
    pub fn set_selected_idx(&mut self, idx: usize) {
        self.content.set_selected_idx(idx);
        if self.selection_enabled {
            self.ensure_selection_visible();
        }
    }

    // --- highlight ---

    /// The active highlight.
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    /// Highlights every occurrence of `highlight`. An empty literal clears it.
    pub fn set_highlight(&mut self, highlight: impl Into<Highlight>) {
        let highlight = highlight.into();
        self.highlight = (!highlight.is_empty()).then_some(highlight);
    }

    /// Highlights every match of a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError::InvalidPattern`] when `pattern` does not
    /// compile. The previous highlight stays in effect.
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    ///
    /// let mut viewport: Model<String> = Model::new(20, 5);
    /// viewport.set_highlight("surf");
    /// assert!(viewport.set_highlight_pattern("(broken").is_err());
    /// assert_eq!(viewport.highlight().map(|h| h.as_str()), Some("surf"));
    /// ```
    pub fn set_highlight_pattern(&mut self, pattern: &str) -> Result<(), HighlightError> {
        match Highlight::pattern(pattern) {
            Ok(highlight) => {
                self.set_highlight(highlight);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "rejected highlight pattern");
                Err(err)
            }
        }
    }

    /// Removes the highlight.
    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    // --- geometry and configuration ---

    /// Width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows, including header and footer.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows available to items: height minus header and footer rows.
    pub fn content_height(&self) -> usize {
        self.content_height
    }

    /// Resizes horizontally. Wrapped rows are recomputed.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.refresh();
    }

    /// Resizes vertically.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.refresh();
    }

    /// Resizes in both directions.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.refresh();
    }

    /// The active configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: Configuration) {
        if config.wrap_text {
            self.x_offset = 0;
        }
        self.config = config;
        self.refresh();
    }

    /// Whether long lines wrap.
    pub fn wrap_text(&self) -> bool {
        self.config.wrap_text
    }

    /// Turns wrapping on or off. Resets the horizontal offset.
    pub fn set_wrap_text(&mut self, wrap_text: bool) {
        self.config.wrap_text = wrap_text;
        self.x_offset = 0;
        self.refresh();
    }

    /// Whether the footer may be shown.
    pub fn footer_enabled(&self) -> bool {
        self.config.footer_enabled
    }

    /// Enables or disables the footer.
    pub fn set_footer_enabled(&mut self, enabled: bool) {
        self.config.footer_enabled = enabled;
        self.refresh();
    }

    /// Replaces the continuation indicator.
    pub fn set_continuation_indicator(&mut self, indicator: impl Into<String>) {
        self.config.continuation_indicator = indicator.into();
    }

    // --- offsets ---

    /// First content row shown.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// First column shown.
    pub fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// Total display rows across all items.
    pub fn total_rows(&self) -> usize {
        self.lines.total_rows()
    }

    /// Width of the widest line currently on screen, header included.
    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Whether the footer is part of the current frame.
    pub fn footer_visible(&self) -> bool {
        self.footer_rows() > 0
    }

    // --- Bubble Tea glue ---

    /// Applies a key press according to [`Model::keymap`].
    ///
    /// ```rust
    /// use bubbletea_viewport::viewport::Model;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut viewport = Model::new(20, 3);
    /// viewport.set_items((0..10).map(|i| i.to_string()).collect());
    /// viewport.handle_key(&KeyMsg { key: KeyCode::Char('j'), modifiers: KeyModifiers::NONE });
    /// assert_eq!(viewport.y_offset(), 1);
    /// ```
    pub fn handle_key(&mut self, msg: &KeyMsg) {
        if self.keymap.up.matches(msg) {
            if self.selection_enabled {
                self.select_up(1);
            } else {
                self.scroll_up(1);
            }
        } else if self.keymap.down.matches(msg) {
            if self.selection_enabled {
                self.select_down(1);
            } else {
                self.scroll_down(1);
            }
        } else if self.keymap.left.matches(msg) {
            self.pan_left(self.pan_step());
        } else if self.keymap.right.matches(msg) {
            self.pan_right(self.pan_step());
        } else if self.keymap.half_page_up.matches(msg) {
            self.half_page_up();
        } else if self.keymap.half_page_down.matches(msg) {
            self.half_page_down();
        } else if self.keymap.page_up.matches(msg) {
            self.page_up();
        } else if self.keymap.page_down.matches(msg) {
            self.page_down();
        } else if self.keymap.top.matches(msg) {
            self.goto_top();
        } else if self.keymap.bottom.matches(msg) {
            self.goto_bottom();
        }
    }

    fn pan_step(&self) -> usize {
        (self.width / 4).max(1)
    }

    // --- internal consistency ---

    fn footer_rows(&self) -> usize {
        let available = self.height.saturating_sub(self.lines.header().len());
        usize::from(
            self.config.footer_enabled && available > 0 && self.lines.total_rows() > available,
        )
    }

    /// Recomputes the layout after any structural change, then restores the
    /// offset invariants.
    fn refresh(&mut self) {
        self.lines.rebuild(
            self.content.items(),
            self.content.header(),
            self.width,
            self.config.wrap_text,
        );
        let available = self.height.saturating_sub(self.lines.header().len());
        self.content_height = available - self.footer_rows();
        self.y_offset = self.y_offset.min(self.max_y_offset());
        if self.selection_enabled {
            self.ensure_selection_visible();
        }
        self.sync_window();
    }

    /// Materializes the rows around the current offset and re-clamps the
    /// horizontal offset against the lines now on screen.
    fn sync_window(&mut self) {
        self.lines
            .ensure_materialized(self.content.items(), self.y_offset, self.content_height);
        self.max_line_length = self.lines.max_line_width(self.y_offset, self.content_height);
        self.x_offset = self.x_offset.min(self.max_x_offset());
    }
}

impl<T: Renderable + Send + 'static> BubbleTeaModel for Model<T> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    /// Renders the frame, styling each span through [`Model::styles`].
    fn view(&self) -> String {
        self.render_styled(&self.frame())
    }
}

/// Creates a viewport with the given size.
///
/// ```rust
/// use bubbletea_viewport::viewport;
///
/// let vp: viewport::Model<String> = viewport::new(80, 24);
/// assert_eq!(vp.height(), 24);
/// ```
pub fn new<T: Renderable>(width: usize, height: usize) -> Model<T> {
    Model::new(width, height)
}
