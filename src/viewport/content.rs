//! Item storage and selection tracking.

use std::fmt;
use std::sync::Arc;

/// Decides whether two items are "the same" across content replacements.
///
/// Used by [`ContentManager::set_items`] to keep the selection on the same
/// logical item after new items arrive.
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Owns the item list, the header and the selected index.
///
/// The selected index is always a valid index into the items, or zero when
/// there are none.
///
/// # Examples
///
/// ```rust
/// use bubbletea_viewport::viewport::ContentManager;
///
/// let mut content = ContentManager::new();
/// content.set_compare_fn(|a: &String, b: &String| a == b);
/// content.set_items(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
/// content.set_selected_idx(1);
///
/// // "b" moves to the end; the selection follows it
/// content.set_items(vec!["a".to_string(), "c".to_string(), "b".to_string()]);
/// assert_eq!(content.selected_idx(), 2);
/// ```
pub struct ContentManager<T> {
    items: Vec<T>,
    header: Vec<String>,
    selected_idx: usize,
    compare_fn: Option<CompareFn<T>>,
}

impl<T> Default for ContentManager<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            header: Vec::new(),
            selected_idx: 0,
            compare_fn: None,
        }
    }
}

impl<T: Clone> Clone for ContentManager<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            header: self.header.clone(),
            selected_idx: self.selected_idx,
            compare_fn: self.compare_fn.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ContentManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentManager")
            .field("items", &self.items)
            .field("header", &self.header)
            .field("selected_idx", &self.selected_idx)
            .field("compare_fn", &self.compare_fn.is_some())
            .finish()
    }
}

impl<T> ContentManager<T> {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Header lines shown above the items.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Replaces the header lines.
    pub fn set_header(&mut self, header: Vec<String>) {
        self.header = header;
    }

    /// Installs the comparator used to relocate the selection.
    pub fn set_compare_fn<F>(&mut self, compare: F)
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.compare_fn = Some(Arc::new(compare));
    }

    /// Removes the comparator. The selection is then only clamped on updates.
    pub fn clear_compare_fn(&mut self) {
        self.compare_fn = None;
    }

    /// Replaces the items.
    ///
    /// With a comparator installed, the selection moves to the first new item
    /// equal to the previously selected one. Without a match, or without a
    /// comparator, the old index is kept and clamped to the new length.
    pub fn set_items(&mut self, items: Vec<T>) {
        let previous = std::mem::replace(&mut self.items, items);
        if let (Some(compare), Some(selected)) =
            (&self.compare_fn, previous.get(self.selected_idx))
        {
            if let Some(idx) = self.items.iter().position(|item| compare(selected, item)) {
                self.selected_idx = idx;
                return;
            }
        }
        self.clamp_selected_idx();
    }

    /// Index of the selected item.
    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    /// Selects `idx`, clamped to the last item.
    pub fn set_selected_idx(&mut self, idx: usize) {
        self.selected_idx = idx;
        self.clamp_selected_idx();
    }

    /// The selected item, or `None` when there are no items.
    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_idx)
    }

    fn clamp_selected_idx(&mut self) {
        self.selected_idx = self.selected_idx.min(self.items.len().saturating_sub(1));
    }
}
