//! Styling roles for viewport output.
//!
//! The compositor never applies colours itself. It tags every span of text
//! with a [`Role`], and [`ViewportStyles`] maps each role to a lipgloss
//! [`Style`]. Replace any field to restyle the viewport; the defaults mirror
//! the look of the Go viewport this component descends from.
//!
//! ```rust
//! use bubbletea_viewport::viewport::{Role, ViewportStyles};
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ViewportStyles::default();
//! styles.selected = Style::new().reverse(true);
//! let _ = styles.style_for(Role::Selected);
//! ```

use lipgloss_extras::prelude::*;

const BLACK: &str = "#000000";
const BLUE: &str = "6";
const PINK: &str = "#E760FC";
const GREY: &str = "#737373";

/// What a span of rendered text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Fixed header rows.
    Header,
    /// Ordinary item rows.
    Content,
    /// Rows belonging to the selected item.
    Selected,
    /// Text matching the configured highlight.
    Highlight,
    /// The scroll-position footer.
    Footer,
}

/// Style applied to each [`Role`].
#[derive(Debug, Clone)]
pub struct ViewportStyles {
    /// Header rows. Bold by default.
    pub header: Style,
    /// Unselected item rows. Unstyled by default.
    pub content: Style,
    /// Selected item rows. Black on blue by default.
    pub selected: Style,
    /// Highlight matches. Black on pink by default.
    pub highlight: Style,
    /// Footer text. Grey by default.
    pub footer: Style,
}

impl Default for ViewportStyles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(true),
            content: Style::new(),
            selected: Style::new()
                .foreground(Color::from(BLACK))
                .background(Color::from(BLUE)),
            highlight: Style::new()
                .foreground(Color::from(BLACK))
                .background(Color::from(PINK)),
            footer: Style::new().foreground(Color::from(GREY)),
        }
    }
}

impl ViewportStyles {
    /// Style used for `role`.
    pub fn style_for(&self, role: Role) -> &Style {
        match role {
            Role::Header => &self.header,
            Role::Content => &self.content,
            Role::Selected => &self.selected,
            Role::Highlight => &self.highlight,
            Role::Footer => &self.footer,
        }
    }
}
