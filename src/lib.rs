#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-viewport/")]

//! # bubbletea-viewport
//!
//! A scrollable, selectable viewport for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! ## Overview
//!
//! The viewport displays a window onto an arbitrarily long list of items.
//! Each item renders to a single logical line; the viewport then decides how
//! that line is shown:
//!
//! - **Truncation** with a continuation indicator (`...`) and horizontal
//!   panning, or
//! - **Wrapping** onto as many display rows as the width requires.
//!
//! On top of that it offers an optional selection cursor, fixed header rows,
//! literal or regex highlighting and a scroll-position footer.
//!
//! ## Modules
//!
//! - [`linebuffer`]: width-aware lines that slice and wrap on grapheme
//!   boundaries, plus highlight matching
//! - [`viewport`]: the component itself
//! - [`key`]: key bindings and the [`KeyMap`] help trait
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_viewport::prelude::*;
//!
//! let mut viewport: Viewport<String> = Viewport::new(24, 5);
//! viewport.set_header(vec!["Surf report".to_string()]);
//! viewport.set_items(vec![
//!     "Pipeline: 6ft, offshore wind".to_string(),
//!     "Mavericks: flat".to_string(),
//! ]);
//! viewport.set_highlight("flat");
//! viewport.set_selection_enabled(true);
//! viewport.select_down(1);
//!
//! let lines = viewport.frame().lines();
//! assert_eq!(lines[0].trim_end(), "Surf report");
//! assert_eq!(lines[1].trim_end(), "Pipeline: 6ft, offsho...");
//! assert_eq!(lines[2].trim_end(), "Mavericks: flat");
//! ```
//!
//! ## Key Bindings
//!
//! Bindings live in [`viewport::ViewportKeyMap`] and can be replaced field
//! by field:
//!
//! ```rust
//! use bubbletea_viewport::key::{Binding, KeyMap};
//! use bubbletea_viewport::viewport::Model;
//! use crossterm::event::KeyCode;
//!
//! let mut viewport: Model<String> = Model::new(80, 24);
//! viewport.keymap.top = Binding::new(vec![KeyCode::Char('<')]).with_help("<", "top");
//! assert_eq!(viewport.keymap.short_help().len(), 4);
//! ```

pub mod key;
pub mod linebuffer;
pub mod viewport;

pub use key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use linebuffer::{Highlight, HighlightError, LineBuffer};
pub use viewport::{
    Configuration, Frame, Renderable, Role, ViewportKeyMap, ViewportStyles, Model as Viewport,
};

/// Convenient re-exports for applications embedding the viewport.
pub mod prelude {
    pub use crate::key::{matches, Binding, Help as KeyHelp, KeyMap, KeyPress};
    pub use crate::linebuffer::{Highlight, HighlightError, LineBuffer};
    pub use crate::viewport::{
        Configuration, Frame, Model as Viewport, Renderable, Role, ViewportKeyMap,
        ViewportStyles,
    };
}
