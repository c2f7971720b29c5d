use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use agrisite_forms::SubmissionError;

/// HTTP status for a finished submission attempt.
pub fn submission_status(result: &Result<(), SubmissionError>) -> StatusCode {
    match result {
        Ok(()) => StatusCode::OK,
        Err(SubmissionError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmissionError::Relay(_)) => StatusCode::BAD_GATEWAY,
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
