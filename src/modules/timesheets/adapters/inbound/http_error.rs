use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::timesheets::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 400 with the validation message, 500 for anything the store reports.
pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Validation(reason) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: reason.to_string(),
            }),
        )
            .into_response(),
        ApplicationError::Store(source) => {
            tracing::error!(error = %source, "timesheet store failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
