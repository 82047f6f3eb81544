//! Shared test utilities and fixtures
//!
//! Drives an [`App`] through the same terminal events the binary receives.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ordlist_engine::App;
use ordlist_tui::apply_event;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Type `text` into the entry one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        apply_event(app, key(KeyCode::Char(c)));
    }
}

/// Type `text` and press Enter.
pub fn submit(app: &mut App, text: &str) {
    type_text(app, text);
    apply_event(app, key(KeyCode::Enter));
}

pub fn items(app: &App) -> Vec<String> {
    app.state().item_strs().map(str::to_owned).collect()
}
