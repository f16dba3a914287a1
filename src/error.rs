// Error types for StudyGenie.

use thiserror::Error;

/// Rejections raised before a document reaches the engine.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid file type. Please upload TXT files only.")]
    InvalidMime,

    #[error("Unsupported file type. Please upload TXT files only.")]
    UnsupportedType,

    #[error("{0} support is temporarily disabled. Please upload TXT files.")]
    Disabled(&'static str),

    #[error("DOC files are not supported. Please upload TXT files.")]
    LegacyDoc,

    #[error("File size too large. Maximum size is {limit_mb}MB.")]
    TooLarge { limit_mb: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("No text could be extracted from the file")]
    EmptyDocument,

    /// Both the full pipeline and the fallback failed.
    #[error("Failed to process file")]
    Failed,
}
