//! Core domain types for ordlist.
//!
//! This crate contains the list state machine and its collation with no IO,
//! no async and minimal dependencies. Everything here can be driven from any
//! front end by plain method calls.

#![allow(clippy::missing_errors_doc)]

pub mod collate;
mod list;
mod proptests;
mod sanitize;
pub mod ui;

pub use list::{AddOutcome, ListController, OrderedListState, SortDirection};
pub use sanitize::sanitize_display_line;

use thiserror::Error;

// ============================================================================
// List Items
// ============================================================================

/// A committed list entry.
///
/// Guaranteed to have non-zero length. Unlike most text validation in a UI,
/// no trimming is applied: a string of only spaces is a valid item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItem(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("list item must not be empty")]
pub struct EmptyItemError;

impl ListItem {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyItemError> {
        let value = value.into();
        if value.is_empty() {
            Err(EmptyItemError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ListItem {
    type Error = EmptyItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ListItem {
    type Error = EmptyItemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListItem> for String {
    fn from(value: ListItem) -> Self {
        value.0
    }
}

impl std::ops::Deref for ListItem {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for ListItem {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ListItem {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ListItem {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
