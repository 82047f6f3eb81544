//! End-to-end behaviour of the list widget, driven by key events.

use crossterm::event::{Event, KeyCode};
use insta::assert_debug_snapshot;
use ordlist_engine::{App, Focus, SortDirection};
use ordlist_tui::apply_event;

use crate::common::{ctrl, items, key, submit, type_text};

#[test]
fn single_item() {
    let mut app = App::default();
    submit(&mut app, "pear");
    assert_eq!(items(&app), ["pear"]);
    assert_eq!(app.state().pending_input(), "");
}

#[test]
fn second_item_sorts_in_front() {
    let mut app = App::default();
    submit(&mut app, "pear");
    submit(&mut app, "banana");
    assert_eq!(items(&app), ["banana", "pear"]);
}

#[test]
fn fruit_basket_ascending_then_descending() {
    let mut app = App::default();
    for fruit in ["pear", "banana", "peach", "watermelon"] {
        submit(&mut app, fruit);
    }
    assert_debug_snapshot!(items(&app), @r#"
    [
        "banana",
        "peach",
        "pear",
        "watermelon",
    ]
    "#);

    apply_event(&mut app, ctrl('s'));
    assert_eq!(app.state().sort_direction(), SortDirection::Descending);
    assert_debug_snapshot!(items(&app), @r#"
    [
        "watermelon",
        "pear",
        "peach",
        "banana",
    ]
    "#);

    submit(&mut app, "nectarine");
    assert_debug_snapshot!(items(&app), @r#"
    [
        "watermelon",
        "pear",
        "peach",
        "nectarine",
        "banana",
    ]
    "#);
}

#[test]
fn toggling_twice_restores_order() {
    let mut app = App::default();
    for item in ["Zeta", "alpha", "Alpha", "éclair", "eclair", "10", "9"] {
        submit(&mut app, item);
    }
    let ascending = items(&app);

    apply_event(&mut app, ctrl('s'));
    let mut descending = items(&app);
    descending.reverse();
    assert_eq!(descending, ascending);

    apply_event(&mut app, ctrl('s'));
    assert_eq!(items(&app), ascending);
}

#[test]
fn empty_entry_is_ignored_silently() {
    let mut app = App::default();
    submit(&mut app, "pear");
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(items(&app), ["pear"]);
}

#[test]
fn duplicates_are_kept() {
    let mut app = App::default();
    submit(&mut app, "pear");
    submit(&mut app, "pear");
    assert_eq!(items(&app), ["pear", "pear"]);
}

#[test]
fn toggle_keeps_pending_text() {
    let mut app = App::default();
    type_text(&mut app, "half typed");
    apply_event(&mut app, ctrl('s'));
    assert_eq!(app.state().pending_input(), "half typed");
}

#[test]
fn clear_from_any_state() {
    let mut app = App::default();
    for fruit in ["pear", "banana", "peach"] {
        submit(&mut app, fruit);
    }
    apply_event(&mut app, ctrl('s'));
    type_text(&mut app, "grape");

    apply_event(&mut app, ctrl('l'));
    assert!(app.state().is_empty());
    assert_eq!(app.state().pending_input(), "");
    // Direction is not part of what clear resets.
    assert_eq!(app.state().sort_direction(), SortDirection::Descending);

    submit(&mut app, "apple");
    submit(&mut app, "kiwi");
    assert_eq!(items(&app), ["kiwi", "apple"]);
}

#[test]
fn buttons_reachable_by_tab() {
    let mut app = App::default();
    submit(&mut app, "pear");
    submit(&mut app, "banana");

    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::SortButton);
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(items(&app), ["pear", "banana"]);

    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::ClearButton);
    apply_event(&mut app, key(KeyCode::Char(' ')));
    assert!(app.state().is_empty());

    apply_event(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn pasted_item_is_single_line() {
    let mut app = App::default();
    apply_event(&mut app, Event::Paste("straw\r\nberry".into()));
    apply_event(&mut app, key(KeyCode::Enter));
    assert_eq!(items(&app), ["strawberry"]);
}
