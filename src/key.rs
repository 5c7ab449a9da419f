//! Type-safe key bindings for the viewport.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown
//! for them. Components expose their bindings through a struct implementing
//! [`KeyMap`], so a help view can list them without knowing the component.
//!
//! ```rust
//! use bubbletea_viewport::key::{Binding, KeyPress};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let half_page = Binding::new(vec![KeyPress::from("u"), KeyPress::from("ctrl+u")])
//!     .with_help("u/ctrl+u", "½ page up");
//!
//! let msg = KeyMsg { key: KeyCode::Char('u'), modifiers: KeyModifiers::CONTROL };
//! assert!(half_page.matches(&msg));
//! assert_eq!(half_page.help().desc, "½ page up");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl From<&str> for KeyPress {
    /// Parses descriptions such as `"j"`, `"G"`, `"ctrl+d"`, `"pgdown"`.
    ///
    /// Unknown names fall back to the first character of the last segment.
    fn from(s: &str) -> Self {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        // "+" on its own, or a trailing "+" as in "ctrl++"
        if s.ends_with('+') && parts.len() > 1 {
            parts.truncate(parts.len() - 2);
            parts.push("+");
        }
        let key = parts.pop().unwrap_or_default();
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "option" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => {}
            }
        }

        let code = match key.to_ascii_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" | "pageup" => KeyCode::PageUp,
            "pgdown" | "pgdn" | "pagedown" => KeyCode::PageDown,
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            _ => KeyCode::Char(key.chars().next().unwrap_or(' ')),
        };
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Whether this key press matches an incoming key message.
    ///
    /// Terminals report upper-case letters with the shift modifier set, so
    /// shift is ignored for character keys bound without modifiers.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers == msg.modifiers {
            return true;
        }
        matches!(self.code, KeyCode::Char(_))
            && self.modifiers.is_empty()
            && msg.modifiers == KeyModifiers::SHIFT
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Keys bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Bindings without keys are never active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether an enabled binding contains a key matching `msg`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Returns true when `msg` matches any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Exposes a component's bindings to help views.
pub trait KeyMap {
    /// The handful of bindings shown in a one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn parses_key_descriptions() {
        assert_eq!(
            KeyPress::from("ctrl+d"),
            KeyPress::from((KeyCode::Char('d'), KeyModifiers::CONTROL))
        );
        assert_eq!(KeyPress::from("pgdown").code, KeyCode::PageDown);
        assert_eq!(KeyPress::from("G").code, KeyCode::Char('G'));
        assert_eq!(KeyPress::from("space").code, KeyCode::Char(' '));
        assert_eq!(KeyPress::from("+").code, KeyCode::Char('+'));
        assert_eq!(
            KeyPress::from("ctrl++"),
            KeyPress::from((KeyCode::Char('+'), KeyModifiers::CONTROL))
        );
    }

    #[test]
    fn modifiers_must_match() {
        let b = Binding::new(vec!["ctrl+u"]);
        assert!(b.matches(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('u'), KeyModifiers::NONE)));
    }

    #[test]
    fn shifted_characters_match_plain_bindings() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_bindings_never_match() {
        let mut b = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        let msg = key(KeyCode::Up, KeyModifiers::NONE);
        assert!(b.matches(&msg));
        b.set_enabled(false);
        assert!(!b.matches(&msg));
        assert!(!matches(&msg, &[&b]));
        assert!(!Binding::default().enabled());
    }
}
