//! PDF engine layer
//!
//! This module wraps the PDF libraries: PDFium for positioned text
//! extraction, lopdf for generating the summary document.

pub mod reader;
pub mod writer;

pub use reader::{first_page_tokens, PositionedToken};
pub use writer::{single_page_document, PageSpec, TextDraw};
