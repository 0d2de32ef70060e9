//! Bukti Potong Pajak summarizer
//!
//! This crate turns an Indonesian tax-withholding-slip PDF into a simplified
//! one-page summary:
//! - `slip::extract`: coordinate-based field extraction from page 1
//! - `slip::render`: re-render the extracted fields onto a new document
//! - `staging::StagingStore`: serve-once staging of generated files
//!
//! The web layer (routing, uploads, views) lives outside this crate; it
//! calls in with an in-memory PDF buffer and gets back either a field map,
//! a staged filename, or a streamed download.

pub mod config;
pub mod error;
pub mod pdf;
pub mod slip;
pub mod staging;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use slip::{extract, generate_summary, FieldMap, GeneratedDocument, SlipTemplate};
pub use staging::{Download, StagingStore};
