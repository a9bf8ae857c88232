//! Error types for pdfpages.

/// Everything that can go wrong after the command line has been validated.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PdfpagesError {
    /// I/O error (reading the input, writing the output file).
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Document-level error (not a PDF, malformed, extraction failure).
    #[error("{0}")]
    Document(String),
}

/// Convenience alias used throughout the crate.
pub(crate) type Result<T> = std::result::Result<T, PdfpagesError>;
