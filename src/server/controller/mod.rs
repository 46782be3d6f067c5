//! HTTP request handlers.
//!
//! Each handler decodes the request body, converts it into service parameters, calls the
//! service and maps the outcome to a status code and body. The status chosen for a
//! service failure differs per resource and operation, so the mapping lives here rather
//! than in `AppError`.

pub mod section;
pub mod student;
pub mod survey;


use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::AppError;

/// Unwraps a JSON body, turning any rejection into a 400 "Invalid input".
///
/// Covers malformed JSON, mismatched field types and a missing or wrong content type.
pub(crate) fn decode_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection);
            Err(AppError::BadRequest("Invalid input".to_string()))
        }
    }
}
