use anyhow::Context;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use timesheets::modules::timesheets::adapters::outbound::timesheet_store_in_memory::InMemoryTimesheetStore;
use timesheets::shell::config::AppConfig;
use timesheets::shell::graphql::{build_schema, graphiql, graphql};
use timesheets::shell::http::router;
use timesheets::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // In-memory store for now
    let store = Arc::new(InMemoryTimesheetStore::new());
    let state = AppState::new(store);
    let schema = build_schema(state.clone());

    let app = Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP endpoint: http://{}/timesheets", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
