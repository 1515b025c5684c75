//! Document-to-Markdown conversion.
//!
//! The upload pipeline treats conversion as an opaque capability: given a
//! staged file path, produce Markdown plus an optional title and metadata.
//! The production [`MarkdownConverter`] delegates each format to an existing
//! extraction crate; this crate implements no document parsing of its own.

mod markdown;
mod markup;
mod office;
mod pdf;
mod tabular;

pub use markdown::MarkdownConverter;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Extracted document content returned by a converter.
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    /// Markdown rendition of the document's text content.
    pub markdown: String,
    /// Document title, when the source format carries one.
    pub title: Option<String>,
    /// Free-form metadata describing the source document.
    pub metadata: BTreeMap<String, String>,
}

/// Errors raised while converting a staged file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The file extension maps to no known converter.
    #[error("unsupported file format '{0}'")]
    Unsupported(String),
    /// The staged file could not be read.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    /// The format library rejected the document contents.
    #[error("{0}")]
    Extraction(String),
}

/// Opaque capability turning a staged file into Markdown.
///
/// Implementations must be stateless with respect to requests; one instance
/// is shared across all in-flight uploads.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    /// Convert the file at `path`, returning extracted Markdown and metadata.
    async fn convert(&self, path: &Path) -> Result<ConversionResult, ConvertError>;
}
