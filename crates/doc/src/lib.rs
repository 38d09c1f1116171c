//! Custody form generation.
//!
//! Renders one asset record plus its custodian into a fixed-layout,
//! single-page PDF with signature blocks for handover. Text is drawn
//! with an external TTF font so Turkish and other non-ASCII characters
//! in labels and values render correctly.

pub mod config;
pub mod error;
pub mod form;

pub use config::DocumentConfig;
pub use error::DocumentError;
pub use form::{custody_file_name, generate_custody_form};
