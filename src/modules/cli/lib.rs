//! dbfix CLI
//!
//! This crate provides the command-line interface for dbfix: scanning a
//! directory (or a single file) for database configuration fields and
//! rewriting them into canonical form.

pub mod commands;

pub use commands::{Cli, FixCommand};
