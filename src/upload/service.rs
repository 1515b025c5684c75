//! Upload service coordinating staging, conversion, and cleanup.

use crate::convert::DocumentConverter;
use crate::upload::{
    sanitize::{file_extension, sanitize_filename},
    scratch::ScratchFile,
    types::{UploadError, UploadOutcome},
};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Abstraction over the upload pipeline used by the HTTP surface.
#[async_trait]
pub trait UploadApi: Send + Sync {
    /// Stage the uploaded bytes, convert them to Markdown, and clean up.
    async fn convert_upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadOutcome, UploadError>;
}

/// Coordinates the per-request pipeline: sanitize, stage, convert, clean up.
///
/// The service owns a long-lived handle to the document converter so the HTTP
/// surface shares one instance across requests through an `Arc`. It holds no
/// per-request state; concurrent uploads are isolated by the random token in
/// each scratch filename.
pub struct UploadService {
    converter: Arc<dyn DocumentConverter>,
    scratch_dir: PathBuf,
}

impl UploadService {
    /// Build a service staging files under the configured scratch directory.
    pub fn new(converter: Arc<dyn DocumentConverter>) -> Self {
        Self::with_scratch_dir(converter, crate::config::get_config().scratch_dir.clone())
    }

    /// Build a service staging files under an explicit scratch directory.
    pub fn with_scratch_dir(converter: Arc<dyn DocumentConverter>, scratch_dir: PathBuf) -> Self {
        Self {
            converter,
            scratch_dir,
        }
    }
}

#[async_trait]
impl UploadApi for UploadService {
    async fn convert_upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadOutcome, UploadError> {
        let filename = sanitize_filename(file_name);
        let extension = file_extension(&filename);
        let unique_name = format!("{}_{}", Uuid::new_v4().simple(), filename);

        let staged = ScratchFile::create(&self.scratch_dir, &unique_name, &bytes)
            .await
            .map_err(|err| UploadError::Internal(err.to_string()))?;
        tracing::debug!(
            path = %staged.path().display(),
            bytes = bytes.len(),
            "Staged upload"
        );

        let conversion = self.converter.convert(staged.path()).await;
        let staged_size = tokio::fs::metadata(staged.path()).await;
        staged.remove().await;

        let result = conversion.map_err(|err| {
            tracing::warn!(filename = %filename, error = %err, "Conversion failed");
            UploadError::Conversion {
                filename: filename.clone(),
                message: err.to_string(),
            }
        })?;
        let file_size_bytes = staged_size
            .map_err(|err| UploadError::Internal(err.to_string()))?
            .len();

        tracing::info!(
            filename = %filename,
            extension = %extension,
            size = file_size_bytes,
            "Upload converted"
        );
        Ok(UploadOutcome {
            filename,
            file_extension: extension,
            file_size_bytes,
            markdown_content: result.markdown,
            title: result.title,
            metadata: result.metadata,
        })
    }
}
