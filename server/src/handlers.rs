//! HTTP Handlers for the Snowflake and Databricks statement APIs

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use engine::protocol::StatementRequest;

use crate::state::AppState;

/// Lifetime reported for issued OAuth tokens
const TOKEN_EXPIRES_IN: i64 = 3600;

/// Decode an execute body; anything unreadable is an empty statement
fn statement_request(body: &[u8]) -> StatementRequest {
    StatementRequest::from_body(body).unwrap_or_else(|e| {
        tracing::warn!(
            code = e.error_code(),
            "Unreadable request body, treating as empty statement: {}",
            e
        );
        StatementRequest::default()
    })
}

/// Snowflake SQL execution handler
///
/// POST /api/v2/statements
pub async fn execute_snowflake_statement(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let request = statement_request(&body);
    tracing::info!("Executing Snowflake SQL: {}", request.statement);

    let response = state.executor.execute_snowflake(&request.statement);
    (StatusCode::OK, Json(response))
}

/// Databricks SQL execution handler
///
/// POST /api/2.0/sql/statements
pub async fn execute_databricks_statement(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> impl IntoResponse {
    let request = statement_request(&body);
    tracing::info!("Executing Databricks SQL: {}", request.statement);

    let response = state.executor.execute_databricks(&request.statement);
    (StatusCode::OK, Json(response))
}

/// Databricks statement status handler
///
/// GET /api/2.0/sql/statements/{statement_id}
pub async fn get_databricks_statement(
    State(state): State<Arc<AppState>>,
    Path(statement_id): Path<String>,
) -> impl IntoResponse {
    tracing::info!("Getting status for statement: {}", statement_id);

    (
        StatusCode::OK,
        Json(state.executor.statement_status(&statement_id)),
    )
}

/// Health check handler
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// OAuth token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// OAuth token handler (dummy authentication)
///
/// POST /oauth/token-request
pub async fn oauth_token_request() -> impl IntoResponse {
    tracing::info!("OAuth token request");

    // Tokens are never verified by any endpoint
    let response = TokenResponse {
        access_token: format!("mock_snowflake_token_{}", Uuid::new_v4()),
        token_type: "Bearer".to_string(),
        expires_in: TOKEN_EXPIRES_IN,
    };

    (StatusCode::OK, Json(response))
}
