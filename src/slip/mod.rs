//! Slip domain layer
//!
//! The template describes where each field lives on the source form, the
//! extractor aggregates page-1 tokens into a [`FieldMap`], and the summary
//! renderer lays the map out on a fresh one-page document.

pub mod extractor;
pub mod summary;
pub mod template;

pub use extractor::{collect_fields, extract, FieldMap};
pub use summary::{render, GeneratedDocument};
pub use template::{field, CaptureRegion, FieldKind, FieldSpec, SlipTemplate};

use crate::config::AppConfig;
use crate::error::Result;

/// Upload-flow pipeline: extract the slip fields from `data` and render the
/// staged summary document, returning its identifier.
pub fn generate_summary(data: &[u8], config: &AppConfig) -> Result<GeneratedDocument> {
    let fields = extract(data, &config.template)?;
    summary::render(&fields, &config.staging_dir)
}
