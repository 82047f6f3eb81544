//! Property-based tests for the list controller and collation.
