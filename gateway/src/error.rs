use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use json_http_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("item {0} not found")]
    NotFound(u64),

    /// The item service answered with a non-success status where an item
    /// was required.
    #[error("item service rejected the request")]
    Rejected,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Rejected | GatewayError::Client(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let GatewayError::Client(err) = &self {
            tracing::warn!("forwarding to item service failed: {err}");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String),
}
