use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::timesheets::adapters::inbound::http_error::error_response;
use crate::modules::timesheets::core::record::TimesheetId;
use crate::modules::timesheets::use_cases::get_timesheet_by_id::query::GetTimesheetById;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<TimesheetId>,
) -> impl IntoResponse {
    match state.get_handler.handle(GetTimesheetById { id }).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_response(e),
    }
}
