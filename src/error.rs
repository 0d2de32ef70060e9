//! Error types for bukti-potong

use thiserror::Error;

/// Result type alias for bukti-potong
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bukti-potong
#[derive(Error, Debug)]
pub enum Error {
    /// The uploaded document does not match the expected slip layout
    /// (the mandatory registration number came out empty)
    #[error("File invalid or not formatted")]
    InvalidDocument,

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDFium error
    #[error("PDFium error: {reason}")]
    Pdfium { reason: String },

    /// Malformed slip template configuration
    #[error("Invalid template: {reason}")]
    Template { reason: String },

    /// PDF generation error
    #[error("PDF write error: {0}")]
    PdfWrite(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Return a sanitized error message safe to send to clients.
    /// Internal details (paths, library errors) are omitted.
    /// Full details should be logged via tracing before calling this.
    pub fn client_message(&self) -> String {
        match self {
            Error::InvalidDocument => "File invalid or not formatted".to_string(),
            Error::InvalidPdf { .. } => "Invalid PDF file".to_string(),
            Error::Pdfium { .. } => "PDF processing error".to_string(),
            Error::Template { .. } => "Invalid template".to_string(),
            Error::PdfWrite(_) => "PDF processing error".to_string(),
            Error::Io(_) => "I/O error".to_string(),
            Error::Serialization(_) => "Serialization error".to_string(),
        }
    }

    /// Whether the failure is caused by the uploaded file rather than the
    /// server. User-correctable errors should be surfaced to the client as
    /// input errors, never retried.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidDocument | Error::InvalidPdf { .. })
    }
}
