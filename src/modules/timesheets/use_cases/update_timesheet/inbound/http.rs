use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::modules::timesheets::adapters::inbound::http_error::error_response;
use crate::modules::timesheets::core::record::TimesheetId;
use crate::modules::timesheets::use_cases::update_timesheet::command::UpdateTimesheet;
use crate::shell::state::AppState;

// Every key may be left out. Only ticket_reference accepts null.
#[derive(Deserialize)]
pub struct UpdateTimesheetBody {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub category: Option<String>,
    /// Absent key: keep. `null`: clear. String: replace.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub ticket_reference: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub line_item_count: Option<i64>,
}

// Only called when the key is present. `T` decides whether null is a value:
// Option<String> turns it into None, the other field types reject it.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<TimesheetId>,
    body: Result<Json<UpdateTimesheetBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateTimesheet {
        id,
        name: body.name,
        start_time: body.start_time,
        end_time: body.end_time,
        category: body.category,
        ticket_reference: body.ticket_reference,
        line_item_count: body.line_item_count,
        requested_at: Utc::now(),
    };

    match state.update_handler.handle(command).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => error_response(e),
    }
}
