//! Consumer service: re-exposes the user collection fetched through the SDK.
//!
//! # Design
//! `GET /consumeuser` delegates to `UserServiceClient::fetch_users` and
//! forwards the result verbatim. Each SDK failure kind is caught at the
//! handler and mapped to an explicit status with a structured JSON body
//! instead of bubbling into the framework's bare 500. No other state: one
//! inbound request, one downstream call, one response.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::warn;
use user_service_sdk::{ApiError, HttpRequestAdapter, User, UserServiceClient};

/// The one client configuration this service runs with.
pub type Client = UserServiceClient<HttpRequestAdapter>;

pub fn app(client: Arc<Client>) -> Router {
    Router::new()
        .route("/consumeuser", get(consume_user))
        .with_state(client)
}

pub async fn run(listener: TcpListener, client: Arc<Client>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(client)).await
}

async fn consume_user(
    State(client): State<Arc<Client>>,
) -> Result<Json<Vec<User>>, UpstreamError> {
    let users = client.fetch_users().await.map_err(UpstreamError)?;
    Ok(Json(users))
}

/// SDK failure surfaced by this service's handlers.
///
/// Transport, status, and payload failures all mean the upstream exchange
/// went wrong, so they map to 502; a bad base address is our own
/// configuration fault and maps to 500.
struct UpstreamError(ApiError);

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "fetching users from user-service failed");
        let (status, kind) = match &self.0 {
            ApiError::Transport(_) => (StatusCode::BAD_GATEWAY, "transport"),
            ApiError::UnexpectedStatus { .. } => (StatusCode::BAD_GATEWAY, "upstream_status"),
            ApiError::Deserialization(_) => (StatusCode::BAD_GATEWAY, "upstream_payload"),
            ApiError::InvalidBaseUrl(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration"),
        };
        let body = Json(json!({
            "error": kind,
            "detail": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
