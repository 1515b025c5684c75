//! HTTP surface for the docmd conversion service.
//!
//! This module exposes a compact Axum router with a handful of endpoints:
//!
//! - `POST /upload` – Accept a multipart file upload, stage it, convert it to
//!   Markdown, and return the extracted content with file details.
//! - `GET /supported-formats` – Advertise the static format catalog and the
//!   maximum upload size.
//! - `GET /` – Constant greeting payload.
//! - `GET /env` – Echo the `MESSAGE` environment variable for deployment
//!   diagnostics.
//!
//! Body-size enforcement lives entirely in the router layers; the upload
//! handler itself performs no size checks.

use crate::config::get_config;
use crate::formats::{self, MAX_FILE_SIZE_MB};
use crate::upload::{UploadApi, UploadError, UploadOutcome};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Build the HTTP router exposing the conversion API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: UploadApi + 'static,
{
    let max_body_bytes = get_config().max_upload_mb * 1024 * 1024;
    Router::new()
        .route("/", get(root))
        .route("/env", get(env_message))
        .route("/upload", post(upload_document::<S>))
        .route("/supported-formats", get(supported_formats))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Response body shared by the greeting and diagnostics endpoints.
#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

/// Constant greeting payload.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, World!".to_string(),
    })
}

/// Echo the `MESSAGE` environment variable, or `Not set` when absent.
async fn env_message() -> Json<MessageResponse> {
    let value = std::env::var("MESSAGE").unwrap_or_else(|_| "Not set".to_string());
    Json(MessageResponse {
        message: format!("Here is an example of getting an environment variable: {value}"),
    })
}

/// Success response for the `POST /upload` endpoint.
#[derive(Serialize)]
struct UploadResponse {
    success: bool,
    data: UploadData,
    message: &'static str,
}

/// File details and converted content returned on a successful upload.
#[derive(Serialize)]
struct UploadData {
    filename: String,
    file_extension: String,
    file_size_bytes: u64,
    markdown_content: String,
    title: Option<String>,
    metadata: BTreeMap<String, String>,
}

/// Convert an uploaded file to Markdown.
///
/// Reads the multipart body looking for a `file` field, buffers its bytes in
/// memory, and hands them to the upload service. Validation failures map to
/// 400, converter failures to 422, and everything else to 500.
async fn upload_document<S>(
    State(service): State<Arc<S>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError>
where
    S: UploadApi,
{
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| UploadError::Internal(err.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| UploadError::Internal(err.to_string()))?;
        upload = Some((file_name, bytes.to_vec()));
        break;
    }

    let (file_name, bytes) = upload.ok_or(UploadError::NoFileSelected)?;
    if file_name.is_empty() {
        return Err(UploadError::NoFileSelected.into());
    }

    let outcome = service.convert_upload(&file_name, bytes).await?;
    tracing::info!(
        filename = %outcome.filename,
        size = outcome.file_size_bytes,
        "Upload request completed"
    );
    let UploadOutcome {
        filename,
        file_extension,
        file_size_bytes,
        markdown_content,
        title,
        metadata,
    } = outcome;
    Ok(Json(UploadResponse {
        success: true,
        data: UploadData {
            filename,
            file_extension,
            file_size_bytes,
            markdown_content,
            title,
            metadata,
        },
        message: "File successfully converted to markdown",
    }))
}

/// Response body for `GET /supported-formats`.
#[derive(Serialize)]
struct SupportedFormatsResponse {
    success: bool,
    supported_formats: formats::SupportedFormats,
    max_file_size_mb: usize,
    message: &'static str,
}

/// Advertise the static format catalog and upload ceiling.
async fn supported_formats() -> Json<SupportedFormatsResponse> {
    Json(SupportedFormatsResponse {
        success: true,
        supported_formats: formats::catalog(),
        max_file_size_mb: MAX_FILE_SIZE_MB,
        message: "These are the file formats supported by the markdown conversion service",
    })
}

struct AppError(UploadError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            UploadError::NoFileSelected => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "No file selected",
                    "message": "Please select a file to upload",
                }),
            ),
            UploadError::Conversion { ref filename, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "error": "Conversion failed",
                    "message": self.0.to_string(),
                    "filename": filename,
                }),
            ),
            UploadError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": "Upload failed",
                    "message": self.0.to_string(),
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<UploadError> for AppError {
    fn from(inner: UploadError) -> Self {
        Self(inner)
    }
}
