//! UI-facing state types.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod entry;
mod focus;
mod options;

pub use entry::EntryBuffer;
pub use focus::Focus;
pub use options::UiOptions;
