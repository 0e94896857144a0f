use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::timesheets::adapters::inbound::http_error::error_response;
use crate::modules::timesheets::use_cases::list_timesheets::query::ListTimesheets;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimesheets>,
) -> impl IntoResponse {
    match state.list_handler.handle(params).await {
        Ok(records) => Json(records).into_response(),
        Err(e) => error_response(e),
    }
}
