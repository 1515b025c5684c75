//! Core data types and error definitions for the upload pipeline.

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors emitted by the upload pipeline, translated to HTTP statuses once at
/// the API boundary.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The request carried no file part, or the part had an empty filename.
    #[error("No file selected")]
    NoFileSelected,
    /// The document converter rejected the staged file.
    #[error("Failed to convert file to markdown: {message}")]
    Conversion {
        /// Sanitized filename echoed back to the caller.
        filename: String,
        /// Human-readable cause reported by the converter.
        message: String,
    },
    /// Any other failure while receiving or staging the upload.
    #[error("An error occurred during file upload: {0}")]
    Internal(String),
}

/// Result of one successful upload conversion.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Sanitized filename the upload was staged under.
    pub filename: String,
    /// Lowercase extension derived from the sanitized filename.
    pub file_extension: String,
    /// Size of the staged file on disk, read before cleanup.
    pub file_size_bytes: u64,
    /// Markdown rendition of the document.
    pub markdown_content: String,
    /// Document title, when the converter found one.
    pub title: Option<String>,
    /// Converter-reported metadata for the source document.
    pub metadata: BTreeMap<String, String>,
}
