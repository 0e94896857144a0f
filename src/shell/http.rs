use axum::{
    Json, Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::timesheets::use_cases::create_timesheet::inbound::http as create_http;
use crate::modules::timesheets::use_cases::delete_timesheet::inbound::http as delete_http;
use crate::modules::timesheets::use_cases::get_timesheet_by_id::inbound::http as get_http;
use crate::modules::timesheets::use_cases::list_timesheets::inbound::http as list_http;
use crate::modules::timesheets::use_cases::update_timesheet::inbound::http as update_http;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .route(
            "/timesheets",
            post(create_http::handle).get(list_http::handle),
        )
        .route(
            "/timesheets/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}
