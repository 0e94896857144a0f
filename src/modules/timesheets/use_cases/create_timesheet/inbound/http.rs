use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::timesheets::adapters::inbound::http_error::error_response;
use crate::modules::timesheets::use_cases::create_timesheet::command::CreateTimesheet;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTimesheetBody {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: String,
    #[serde(default)]
    pub ticket_reference: Option<String>,
    pub line_item_count: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTimesheetBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = CreateTimesheet {
        name: body.name,
        start_time: body.start_time,
        end_time: body.end_time,
        category: body.category,
        ticket_reference: body.ticket_reference,
        line_item_count: body.line_item_count,
        requested_at: Utc::now(),
    };

    match state.create_handler.handle(command).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => error_response(e),
    }
}
