//! Error taxonomy for statement parsing.
//!
//! Input errors surface directly to the caller with a user-actionable message
//! and are never retried. Everything recoverable (a page that yields no text,
//! a line that fails to convert) stays out of this type: those are warnings
//! on the result, not errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("the uploaded file is empty")]
    EmptyFile,

    #[error("the file is {actual_mb:.1} MB which exceeds the {limit_mb} MB limit")]
    FileTooLarge { actual_mb: f64, limit_mb: u64 },

    #[error("unsupported file format {extension:?}; only .pdf and .csv statements are supported")]
    UnsupportedFormat { extension: String },

    #[error(
        "this looks like a {found} statement but the {expected} analyzer is selected; \
         upload it in the {found} section instead"
    )]
    ProviderMismatch { found: String, expected: String },

    #[error("could not read the file as a PDF: {0}")]
    InvalidPdf(String),

    #[error("no text could be extracted from any page using any backend")]
    NoText,

    #[error("could not read CSV rows: {0}")]
    InvalidCsv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
