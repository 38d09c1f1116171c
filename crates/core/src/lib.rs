//! Shared domain types for the asset custody tracker.
//!
//! Holds the draft record submitted by the presentation layer, the
//! required-field validation rules, and the error kinds surfaced to
//! callers. No storage access happens here.

pub mod error;
pub mod record;
pub mod types;
