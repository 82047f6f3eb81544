//! Application state: one ordered-list widget plus its view state.

use tracing::{debug, info};

use ordlist_config::OrdlistConfig;
use ordlist_types::ui::{EntryBuffer, Focus, UiOptions};
use ordlist_types::{AddOutcome, ListController, OrderedListState, SortDirection};

/// List scroll position.
///
/// The engine does not know the viewport height, so a reveal request is
/// stored and resolved by [`App::clamp_scroll`] at draw time.
#[derive(Debug, Default, Clone, Copy)]
struct ListScroll {
    offset: usize,
    reveal: Option<usize>,
}

#[derive(Debug, Default)]
pub struct App {
    list: ListController,
    focus: Focus,
    scroll: ListScroll,
    ui_options: UiOptions,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_config(config: Option<&OrdlistConfig>) -> Self {
        Self::new(config.map(OrdlistConfig::ui_options).unwrap_or_default())
    }

    #[must_use]
    pub fn state(&self) -> &OrderedListState {
        self.list.state()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    // ------------------------------------------------------------------
    // Entry editing
    // ------------------------------------------------------------------

    /// Mutable access to the pending entry for keystroke editing.
    pub fn entry_mut(&mut self) -> &mut EntryBuffer {
        self.list.pending_input_mut()
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.list.set_pending_input(text);
    }

    /// Insert pasted text at the cursor.
    ///
    /// The entry is a single-line field, so line breaks are dropped.
    pub fn paste(&mut self, text: &str) {
        let single_line: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
        debug!(len = single_line.len(), "Paste into entry");
        self.list.pending_input_mut().insert_str(&single_line);
    }

    // ------------------------------------------------------------------
    // List operations
    // ------------------------------------------------------------------

    pub fn add_item(&mut self) -> AddOutcome {
        let outcome = self.list.add_item();
        match outcome {
            AddOutcome::Added { index } => {
                info!(index, len = self.state().len(), "Item added");
                self.scroll_to(index);
            }
            AddOutcome::Rejected => debug!("Empty entry ignored"),
        }
        outcome
    }

    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        let direction = self.list.toggle_sort_direction();
        info!(
            direction = direction.as_str(),
            len = self.state().len(),
            "Sort direction toggled"
        );
        self.scroll = ListScroll::default();
        direction
    }

    pub fn clear(&mut self) {
        let dropped = self.state().len();
        self.list.clear();
        info!(dropped, "List cleared");
        self.scroll = ListScroll::default();
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Run the focused control's action.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Input => {
                self.add_item();
            }
            Focus::SortButton => {
                self.toggle_sort_direction();
            }
            Focus::ClearButton => self.clear(),
        }
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll.reveal = None;
        self.scroll.offset = self.scroll.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll.reveal = None;
        let max = self.state().len().saturating_sub(1);
        self.scroll.offset = self.scroll.offset.saturating_add(rows).min(max);
    }

    /// Bring the item at `index` into view on the next draw.
    pub fn scroll_to(&mut self, index: usize) {
        self.scroll.reveal = Some(index);
    }

    /// Fit the scroll offset to a viewport of `visible` rows and return it.
    ///
    /// A pending reveal (from the last add) is brought into view first.
    pub fn clamp_scroll(&mut self, visible: usize) -> usize {
        let len = self.state().len();
        if let Some(index) = self.scroll.reveal.take()
            && visible > 0
        {
            if index < self.scroll.offset {
                self.scroll.offset = index;
            } else if index >= self.scroll.offset + visible {
                self.scroll.offset = index + 1 - visible;
            }
        }
        let max = len.saturating_sub(visible);
        self.scroll.offset = self.scroll.offset.min(max);
        self.scroll.offset
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
