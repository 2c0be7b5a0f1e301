//! Axum route handlers for the leave-letter endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::Local;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::letter::template::{compose, render_letter};
use crate::letter::validation::{issues_message, validate_record};
use crate::models::LeaveRequestRecord;
use crate::pdf::{DocumentSink, PdfSink};
use crate::state::AppState;

/// The fixed suggested filename for every rendered letter.
pub const LETTER_DISPOSITION: &str = "attachment; filename=Hostel_Leave_Letter.pdf";

/// POST /api/v1/leave-letter
///
/// Renders one submitted record into the fixed-template letter and returns
/// the PDF bytes as an attachment. The record is consumed exactly once and
/// never stored. Rendering is CPU-bound and runs on the blocking pool.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(record): Json<LeaveRequestRecord>,
) -> Result<Response, AppError> {
    validate_record(&record).map_err(|issues| AppError::Validation(issues_message(&issues)))?;

    let request_id = Uuid::new_v4();
    info!(%request_id, course = %record.course, "rendering leave letter");

    let config = state.page_config.clone();
    let bytes = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
        let today = Local::now().date_naive();
        let blocks = compose(&record, today);
        let mut sink = PdfSink::new(&config)?;
        render_letter(&blocks, &mut sink)?;
        Ok(sink.finish()?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!(%request_id, bytes = bytes.len(), "leave letter rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, LETTER_DISPOSITION),
        ],
        Bytes::from(bytes),
    )
        .into_response())
}

/// Any non-POST method on the letter endpoint gets the structured 405 body
/// instead of Axum's bare default.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
