//! PDF processing endpoint
//!
//! Accepts a multipart upload with a PDF template and an optional text
//! field, and returns the template bytes unchanged as a downloadable
//! attachment. The processing step itself is a placeholder; this service
//! exists so a frontend can exercise the full upload/download cycle
//! before the real document pipeline lands.

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, StatusCode},
    response::Response,
    routing::post,
    Router,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the process router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/process-pdf", post(process_pdf))
        // Templates are buffered whole in memory; no upload size cap.
        .layer(DefaultBodyLimit::disable())
}

/// POST /process-pdf
///
/// Echoes the uploaded PDF template back as an attachment. The text field
/// is logged for diagnostics and never affects the response.
async fn process_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let upload = &state.config().upload;

    let mut file: Option<(String, Bytes)> = None;
    let mut additional_data: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == upload.file_field {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;
            file = Some((filename, data));
        } else if name == upload.data_field {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read text field: {}", e)))?;
            additional_data = Some(text);
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded.".to_string()))?;

    tracing::info!(
        file_name = %filename,
        file_size = data.len(),
        additional_data = %additional_data.as_deref().unwrap_or("(No additional data provided)"),
        "Received a file to process"
    );

    // Real document processing goes here; the mock passes the template
    // through untouched.
    let processed = data;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", upload.download_filename),
        )
        .body(Body::from(processed))
        .map_err(|e| AppError::Internal(e.to_string()))?)
}
