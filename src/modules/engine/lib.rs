//! File discovery and the fix pipeline for dbfix
//!
//! This crate ties the codec and normalizer together: it locates candidate
//! config files, runs the per-file load/fix/save pipeline, and writes
//! results back with a backup of the original.

pub mod fixer;
pub mod locator;
pub mod persister;

pub use fixer::{ConfigFixer, FixOutcome, FixReport};
pub use locator::find_config_files;
pub use persister::persist_document;
