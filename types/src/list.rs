//! Ordered list state and the controller that mutates it.
//!
//! [`OrderedListState`] holds the pending entry text, the committed items and
//! the sort direction. Its fields are private: only [`ListController`] can
//! change the items, and every controller operation leaves them sorted, so
//! callers never observe an unsorted list.

use std::cmp::Ordering;

use crate::ListItem;
use crate::collate;
use crate::ui::EntryBuffer;

/// Polarity applied to the collation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Compare two strings under this direction.
    ///
    /// Descending swaps the operands of the same comparator, so ties and
    /// locale edge cases reverse exactly.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Ascending => collate::compare(a, b),
            Self::Descending => collate::compare(b, a),
        }
    }
}

/// Result of committing the pending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was committed and now sits at `index`.
    Added { index: usize },
    /// The pending input was empty; nothing was committed.
    Rejected,
}

/// State of one ordered-list widget.
#[derive(Debug, Clone, Default)]
pub struct OrderedListState {
    pending: EntryBuffer,
    items: Vec<ListItem>,
    direction: SortDirection,
}

impl OrderedListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        self.pending.text()
    }

    /// The entry buffer, including its edit cursor.
    #[must_use]
    pub fn entry(&self) -> &EntryBuffer {
        &self.pending
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn item_strs(&self) -> impl ExactSizeIterator<Item = &str> {
        self.items.iter().map(ListItem::as_str)
    }

    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.direction
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Owns an [`OrderedListState`] and exposes the operations that mutate it.
#[derive(Debug, Clone, Default)]
pub struct ListController {
    state: OrderedListState,
}

impl ListController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &OrderedListState {
        &self.state
    }

    /// Mutable access to the pending entry for keystroke editing.
    ///
    /// Only the entry is exposed; the committed items stay sorted.
    pub fn pending_input_mut(&mut self) -> &mut EntryBuffer {
        &mut self.state.pending
    }

    /// Replace the whole pending entry.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.state.pending.set_text(text.into());
    }

    /// Commit the pending entry.
    ///
    /// The entry is reset either way. An empty entry is silently rejected;
    /// otherwise the text is inserted verbatim (duplicates included) at its
    /// sorted position for the current direction.
    pub fn add_item(&mut self) -> AddOutcome {
        let text = self.state.pending.take_text();
        let Ok(item) = ListItem::new(text) else {
            return AddOutcome::Rejected;
        };

        // Insert after any equal items, as a stable sort would.
        let direction = self.state.direction;
        let index = self.state.items.partition_point(|existing| {
            direction.compare(existing.as_str(), item.as_str()) != Ordering::Greater
        });
        self.state.items.insert(index, item);
        AddOutcome::Added { index }
    }

    /// Flip the direction. Returns the new direction.
    ///
    /// The comparator is a total order, so the opposite direction is exactly
    /// the current sequence reversed.
    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        self.state.direction = self.state.direction.toggled();
        self.state.items.reverse();
        self.state.direction
    }

    /// Drop every item and the pending entry. The direction is kept.
    pub fn clear(&mut self) {
        self.state.pending.clear();
        self.state.items.clear();
    }
}
