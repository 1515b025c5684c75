//! Upload pipeline: filename sanitization, scratch staging, and conversion.

pub mod sanitize;
mod scratch;
mod service;
pub mod types;

pub use sanitize::{file_extension, sanitize_filename};
pub use service::{UploadApi, UploadService};
pub use types::{UploadError, UploadOutcome};
