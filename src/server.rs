// HTTP surface: a single multipart upload route that returns the study summary.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::input::{decode_text, validate_upload};
use crate::nlp::text::word_count;
use crate::nlp::{summarize, Summary, SummaryMode};

/// Extra room for multipart framing on top of the file size limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub struct AppState {
    pub config: ServerConfig,
}

fn body_limit(max_upload_bytes: u64) -> usize {
    usize::try_from(max_upload_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let limit = body_limit(state.config.max_upload_bytes);
    Router::new()
        .route("/api/health", get(health))
        .route("/api/study-genie", post(study_genie))
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    std::fs::create_dir_all(&config.tmp_dir)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let app = build_router(Arc::new(AppState { config }));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("StudyGenie server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResponse {
    summary: String,
    file_name: String,
    file_size: usize,
    word_count: usize,
    mode: SummaryMode,
}

struct Upload {
    file_name: String,
    content_type: String,
    bytes: axum::body::Bytes,
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/study-genie: summarize an uploaded plain-text file.
async fn study_genie(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<SummaryResponse>, ApiError> {
    let max_bytes = state.config.max_upload_bytes;

    let upload = read_file_field(multipart, max_bytes)
        .await?
        .ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    validate_upload(&upload.content_type, upload.bytes.len() as u64, max_bytes).map_err(|e| {
        warn!(
            file = %upload.file_name,
            content_type = %upload.content_type,
            size = upload.bytes.len(),
            "upload rejected: {}",
            e
        );
        ApiError::bad_request(e.to_string())
    })?;

    info!(file = %upload.file_name, size = upload.bytes.len(), "summarizing upload");

    let tmp_dir = state.config.tmp_dir.clone();
    let file_name = upload.file_name.clone();
    let bytes = upload.bytes.clone();
    let processed = tokio::task::spawn_blocking(move || process_upload(&tmp_dir, &file_name, &bytes))
        .await
        .map_err(|e| {
            error!("summary task failed: {}", e);
            ApiError::internal("Failed to process file")
        })?;

    let (summary, words) = processed.map_err(|e| {
        error!(file = %upload.file_name, "error processing file: {:#}", e);
        ApiError::internal(e.to_string())
    })?;

    Ok(Json(SummaryResponse {
        summary: summary.report,
        file_name: upload.file_name,
        file_size: upload.bytes.len(),
        word_count: words,
        mode: summary.mode,
    }))
}

fn multipart_error(err: MultipartError, max_bytes: u64) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::bad_request(format!(
            "File size too large. Maximum size is {}MB.",
            max_bytes / (1024 * 1024)
        ))
    } else {
        ApiError::bad_request(err.body_text())
    }
}

/// The first field named `file`; other fields are skipped.
async fn read_file_field(mut multipart: Multipart, max_bytes: u64) -> Result<Option<Upload>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload.txt").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, max_bytes))?;
        return Ok(Some(Upload {
            file_name,
            content_type,
            bytes,
        }));
    }
    Ok(None)
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Stage the upload on disk, decode it and run the engine. The staged file is
/// removed when the guard drops, on every path out of this function.
fn process_upload(tmp_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<(Summary, usize)> {
    std::fs::create_dir_all(tmp_dir)?;

    let prefix = format!("{}-", Uuid::new_v4());
    let suffix = format!("-{}", sanitize_file_name(file_name));
    let mut staged = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(&suffix)
        .tempfile_in(tmp_dir)?;
    staged.write_all(bytes)?;
    staged.flush()?;

    let text = decode_text(&std::fs::read(staged.path())?);
    let words = word_count(&text);
    let summary = summarize(&text)?;

    staged.close()?;
    Ok((summary, words))
}
