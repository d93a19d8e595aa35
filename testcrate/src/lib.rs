//! This crate exists to test the `apint` crates. See the `tests` directory.
