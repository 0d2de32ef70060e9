//! Positioned text extraction via PDFium
//!
//! Capture regions are specified in top-left page space (origin at the top-left
//! corner, Y increasing downward, units in PDF points), matching the layout
//! tables of the source slip. PDFium reports coordinates with a bottom-left
//! origin, so this module flips the Y axis at the boundary:
//!
//! ```text
//! y_top = page_height - y_bottom
//! ```
//!
//! Token anchors sit on the bottom edge of the fragment's bounds. The region
//! table was calibrated against baseline anchors, and the bottom edge tracks
//! the baseline to within the font descent; the top edge would sit most of a
//! line height higher and can fall outside the 14-21pt-tall capture rows.

use crate::error::{Error, Result};
use pdfium_render::prelude::*;

/// One fragment of page text with its anchor position in top-left page space.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken {
    /// X coordinate of the fragment's left edge
    pub x: f32,
    /// Y coordinate of the fragment's anchor line (the bottom edge of its
    /// bounds, just under the text baseline), measured from the page top
    pub y: f32,
    /// The fragment text, exactly as extracted (spaces preserved)
    pub text: String,
}

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Extract the positioned text tokens of page 1.
///
/// Pages beyond the first are ignored; the slip layout is a single page and
/// every capture region lives on it. A document whose first page carries no
/// text layer yields an empty vector, which the caller treats as an
/// unrecognized document.
pub fn first_page_tokens(data: &[u8]) -> Result<Vec<PositionedToken>> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    let pdfium = create_pdfium()?;

    let document = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| Error::InvalidPdf {
            reason: format!("{}", e),
        })?;

    let page = document.pages().get(0).map_err(|e| Error::Pdfium {
        reason: format!("Failed to get page 1: {}", e),
    })?;

    let page_height = page.height().value;

    let text_obj = match page.text() {
        Ok(t) => t,
        // A page with no text layer produces no tokens rather than an error
        Err(_) => return Ok(Vec::new()),
    };

    let mut tokens = Vec::new();

    for segment in text_obj.segments().iter() {
        let text = segment.text();
        if text.is_empty() {
            continue;
        }

        let bounds = segment.bounds();
        tokens.push(PositionedToken {
            x: bounds.left().value,
            // Bottom edge, not top: the anchor must track the baseline the
            // region table was calibrated against
            y: page_height - bounds.bottom().value,
            text,
        });
    }

    tracing::debug!(token_count = tokens.len(), "extracted page 1 tokens");

    Ok(tokens)
}
