//! PDF extraction routes
//!
//! - `POST /extract-pdf` - multipart upload, field `file`
//! - `POST /extract-pdf-url` - JSON `{ "url": "/path/under/assets.pdf" }`
//!
//! Both accept `?detail=text|coordinates` to override the configured
//! response shape.

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
        Multipart, Query, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pdf::{ExtractionDetail, ExtractionResult, PdfExtractor};
use crate::source::{has_pdf_extension, resolve_asset, write_upload};
use crate::state::AppState;

/// Create the extraction router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/extract-pdf", post(extract_upload))
        .route("/extract-pdf-url", post(extract_url))
}

/// Query parameters shared by both endpoints
///
/// `detail` is parsed with `ExtractionDetail::from_str`, the same parser
/// used for `PDF_EXTRACT_DETAIL`.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of `POST /extract-pdf-url`
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: Option<String>,
}

fn detail_override(
    query: std::result::Result<Query<DetailQuery>, QueryRejection>,
) -> Result<Option<ExtractionDetail>> {
    let Query(query) =
        query.map_err(|e| AppError::Validation(format!("Invalid query: {}", e.body_text())))?;
    query
        .detail
        .map(|d| d.parse::<ExtractionDetail>())
        .transpose()
        .map_err(|e| AppError::Validation(format!("Invalid query: {}", e)))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("File too large".to_string())
    } else {
        tracing::error!("Failed to read multipart field: {}", e);
        AppError::Validation(format!("Failed to read upload: {}", e.body_text()))
    }
}

/// Pull the `file` part out of a multipart body, validating its filename
async fn read_pdf_field(mut multipart: Multipart) -> Result<(String, Bytes)> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        // A part without a filename is a plain form value, not a file
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => return Err(AppError::Validation("No file provided".to_string())),
        };
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        if !has_pdf_extension(&filename) {
            return Err(AppError::Validation("File must be a PDF".to_string()));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok((filename, data));
    }

    tracing::warn!("No file field found in multipart upload");
    Err(AppError::Validation("No file provided".to_string()))
}

/// POST /extract-pdf
///
/// The upload is written to a temp file that is removed before the
/// response is built, whether or not extraction succeeds.
async fn extract_upload(
    State(state): State<AppState>,
    query: std::result::Result<Query<DetailQuery>, QueryRejection>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionResult>> {
    let detail = detail_override(query)?;
    let multipart =
        multipart.map_err(|_| AppError::Validation("No file provided".to_string()))?;
    let (filename, data) = read_pdf_field(multipart).await?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        filename = %filename,
        bytes = data.len(),
        "Extracting uploaded PDF"
    );

    let extraction = &state.config().extraction;
    let upload_dir = extraction.upload_dir();
    let extractor = PdfExtractor::new(extraction.options(detail));

    let result = tokio::task::spawn_blocking(move || -> Result<ExtractionResult> {
        let upload = write_upload(&upload_dir, &data)?;
        let result = extractor.extract_path(upload.path());
        if let Err(e) = upload.close() {
            tracing::warn!(%request_id, "Failed to remove upload temp file: {}", e);
        }
        Ok(result?)
    })
    .await
    .map_err(|e| AppError::Server(e.to_string()))??;

    tracing::info!(%request_id, pages = result.pages, "Upload extraction complete");
    Ok(Json(result))
}

/// POST /extract-pdf-url
///
/// Reads a PDF from the asset directory in place. Remote URLs are rejected.
async fn extract_url(
    State(state): State<AppState>,
    query: std::result::Result<Query<DetailQuery>, QueryRejection>,
    body: std::result::Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<ExtractionResult>> {
    let detail = detail_override(query)?;
    let url = body
        .ok()
        .and_then(|Json(request)| request.url)
        .ok_or_else(|| AppError::Validation("No URL provided".to_string()))?;

    let extraction = &state.config().extraction;
    let path = resolve_asset(&extraction.assets_dir, &url)?;

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, path = %path.display(), "Extracting local PDF");

    let extractor = PdfExtractor::new(extraction.options(detail));
    let result = tokio::task::spawn_blocking(move || extractor.extract_path(&path))
        .await
        .map_err(|e| AppError::Server(e.to_string()))??;

    tracing::info!(%request_id, pages = result.pages, "Local extraction complete");
    Ok(Json(result))
}
