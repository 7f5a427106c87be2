//! Mock Cloud Server Library
//!
//! HTTP surface for the Snowflake- and Databricks-style statement APIs.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build server router
pub fn build_router() -> Router {
    build_router_with_state(Arc::new(AppState::new()))
}

/// Build server router over existing state
pub fn build_router_with_state(state: Arc<AppState>) -> Router {
    Router::new()
        // Snowflake SQL API v2
        .route(
            "/api/v2/statements",
            post(handlers::execute_snowflake_statement),
        )
        // Databricks SQL Statement Execution API 2.0
        .route(
            "/api/2.0/sql/statements",
            post(handlers::execute_databricks_statement),
        )
        .route(
            "/api/2.0/sql/statements/{statement_id}",
            get(handlers::get_databricks_statement),
        )
        // Health check
        .route("/health", get(handlers::health_check))
        // Authentication endpoint (dummy)
        .route("/oauth/token-request", post(handlers::oauth_token_request))
        // Middleware
        // Statements of any size must still get a 200 envelope
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start server
pub async fn run(host: &str, port: u16) -> std::io::Result<()> {
    let app = build_router();
    let addr = format!("{}:{}", host, port);

    tracing::info!("Mock cloud server listening on {}", addr);
    tracing::info!("  Snowflake API:  http://{}/api/v2/statements", addr);
    tracing::info!("  Databricks API: http://{}/api/2.0/sql/statements", addr);
    tracing::info!("  Health:         http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
