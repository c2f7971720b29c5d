use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use agrisite_forms::{ContactForm, FormSession, FormState, Submitter, WholesalerForm};

use crate::app::{dto, errors};

pub async fn submit_contact(
    Extension(submitter): Extension<Arc<Submitter>>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> axum::response::Response {
    match body {
        Ok(Json(form)) => submit(&submitter, form).await,
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    }
}

pub async fn submit_wholesaler(
    Extension(submitter): Extension<Arc<Submitter>>,
    body: Result<Json<WholesalerForm>, JsonRejection>,
) -> axum::response::Response {
    match body {
        Ok(Json(form)) => submit(&submitter, form).await,
        Err(e) => errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()),
    }
}

/// One attempt per request; the visitor resubmits by posting again.
async fn submit<F: FormState>(submitter: &Submitter, form: F) -> axum::response::Response {
    let mut session = FormSession::from_form(form);
    let result = session.submit(submitter).await.map(|_| ());

    let status = errors::submission_status(&result);
    let body = dto::SubmissionResponse {
        status: session.state(),
        notification: session.notification(),
        error: result.err().map(|e| e.to_string()),
        form: session.form(),
    };
    (status, Json(body)).into_response()
}
