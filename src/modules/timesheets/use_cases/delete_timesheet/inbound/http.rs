use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::timesheets::adapters::inbound::http_error::error_response;
use crate::modules::timesheets::core::record::TimesheetId;
use crate::modules::timesheets::use_cases::delete_timesheet::command::DeleteTimesheet;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteTimesheetResponse {
    pub deleted: bool,
}

// A missing record is reported as `deleted: false`, never as 404.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<TimesheetId>,
) -> impl IntoResponse {
    match state.delete_handler.handle(DeleteTimesheet { id }).await {
        Ok(deleted) => Json(DeleteTimesheetResponse { deleted }).into_response(),
        Err(e) => error_response(e),
    }
}
