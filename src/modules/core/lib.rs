//! Core domain logic for dbfix
//!
//! This crate contains the document model, the canonical database
//! configuration schema, and the normalizer that rewrites raw
//! connection values into that schema.

pub mod canonical;
pub mod document;
pub mod error;
pub mod normalizer;

pub use canonical::CanonicalDbConfig;
pub use document::{Document, FieldShape, DB_FIELD_KEYS};
pub use error::{DbfixError, Result};
pub use normalizer::{FieldPolicy, Normalizer};
