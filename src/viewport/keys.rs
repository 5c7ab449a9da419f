//! Default key bindings for the viewport.

use crate::key::{self, KeyMap as KeyMapTrait};
use crossterm::event::KeyCode;

const SPACEBAR: char = ' ';

/// Key bindings driving viewport navigation.
///
/// Up and down move the selection when selection is enabled and scroll the
/// view otherwise. Left and right only pan while wrapping is off.
///
/// # Examples
///
/// ```rust
/// use bubbletea_viewport::key;
/// use bubbletea_viewport::viewport::{Model, ViewportKeyMap};
/// use crossterm::event::KeyCode;
///
/// let mut viewport: Model<String> = Model::new(80, 24);
/// let mut keymap = ViewportKeyMap::default();
/// keymap.page_down = key::Binding::new(vec![KeyCode::Char('n')]).with_help("n", "next page");
/// viewport.keymap = keymap;
/// ```
#[derive(Debug, Clone)]
pub struct ViewportKeyMap {
    /// One full page down. Default: PgDn, space, `f`.
    pub page_down: key::Binding,
    /// One full page up. Default: PgUp, `b`.
    pub page_up: key::Binding,
    /// Half a page up. Default: `u`, `ctrl+u`.
    pub half_page_up: key::Binding,
    /// Half a page down. Default: `d`, `ctrl+d`.
    pub half_page_down: key::Binding,
    /// One step up. Default: ↑, `k`.
    pub up: key::Binding,
    /// One step down. Default: ↓, `j`.
    pub down: key::Binding,
    /// Pan left. Default: ←, `h`.
    pub left: key::Binding,
    /// Pan right. Default: →, `l`.
    pub right: key::Binding,
    /// Jump to the first item. Default: Home, `g`.
    pub top: key::Binding,
    /// Jump to the last item. Default: End, `G`.
    pub bottom: key::Binding,
}

impl Default for ViewportKeyMap {
    fn default() -> Self {
        Self {
            page_down: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Char(SPACEBAR),
                KeyCode::Char('f'),
            ])
            .with_help("f/pgdn", "page down"),
            page_up: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Char('b')])
                .with_help("b/pgup", "page up"),
            half_page_up: key::Binding::new(vec!["u", "ctrl+u"]).with_help("u/ctrl+u", "½ page up"),
            half_page_down: key::Binding::new(vec!["d", "ctrl+d"])
                .with_help("d/ctrl+d", "½ page down"),
            up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            left: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "pan left"),
            right: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "pan right"),
            top: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "top"),
            bottom: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "bottom"),
        }
    }
}

impl KeyMapTrait for ViewportKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.page_up, &self.page_down]
    }

    /// Bindings grouped as: vertical, horizontal, paging, half paging, jumps.
    ///
    /// ```rust
    /// use bubbletea_viewport::key::KeyMap;
    /// use bubbletea_viewport::viewport::ViewportKeyMap;
    ///
    /// assert_eq!(ViewportKeyMap::default().full_help().len(), 5);
    /// ```
    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.left, &self.right],
            vec![&self.page_up, &self.page_down],
            vec![&self.half_page_up, &self.half_page_down],
            vec![&self.top, &self.bottom],
        ]
    }
}
