//! Presentation options for the viewport.

/// Default marker drawn where a line is cut off horizontally.
pub const DEFAULT_CONTINUATION_INDICATOR: &str = "...";

/// Options that change how content is laid out.
///
/// # Examples
///
/// ```rust
/// use bubbletea_viewport::viewport::{Configuration, Model};
///
/// let config = Configuration::new()
///     .with_wrap_text(true)
///     .with_continuation_indicator("…");
/// let viewport: Model<String> = Model::new(40, 10).with_config(config);
/// assert!(viewport.wrap_text());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Wrap long lines onto several rows instead of truncating them.
    pub wrap_text: bool,
    /// Show the scroll-position footer when content overflows.
    pub footer_enabled: bool,
    /// Marker replacing the clipped edge of a horizontally truncated line.
    pub continuation_indicator: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            wrap_text: false,
            footer_enabled: true,
            continuation_indicator: DEFAULT_CONTINUATION_INDICATOR.to_string(),
        }
    }
}

impl Configuration {
    /// Creates the default configuration: no wrapping, footer on, `"..."`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for [`Configuration::wrap_text`].
    pub fn with_wrap_text(mut self, wrap_text: bool) -> Self {
        self.wrap_text = wrap_text;
        self
    }

    /// Builder for [`Configuration::footer_enabled`].
    pub fn with_footer_enabled(mut self, footer_enabled: bool) -> Self {
        self.footer_enabled = footer_enabled;
        self
    }

    /// Builder for [`Configuration::continuation_indicator`].
    pub fn with_continuation_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.continuation_indicator = indicator.into();
        self
    }
}
