//! Core engine for ordlist - widget state and orchestration.
//!
//! This crate owns the [`App`] without TUI dependencies. A front end reads
//! state through accessors and drives it through plain method calls.

mod app;

pub use app::App;

pub use ordlist_config::{AppConfig, ConfigError, OrdlistConfig};
pub use ordlist_types::ui::{EntryBuffer, Focus, UiOptions};
pub use ordlist_types::{
    AddOutcome, ListController, ListItem, OrderedListState, SortDirection, sanitize_display_line,
};
