//! Handler errors and their JSON responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::ErrorResponse;
use crate::output::ExtractionError;

/// Error returned by the `/query` handler.
///
/// The `Display` text is sent verbatim as `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Malformed body, missing field or empty query. 400.
    #[error("{0}")]
    BadRequest(String),
    /// Graph construction, invocation or answer extraction failed. 500.
    #[error("{0}")]
    Agent(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Agent(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<agent_graph::AgentError> for ServerError {
    fn from(e: agent_graph::AgentError) -> Self {
        ServerError::Agent(e.to_string())
    }
}

impl From<ExtractionError> for ServerError {
    fn from(e: ExtractionError) -> Self {
        ServerError::Agent(e.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "query failed");
        } else {
            tracing::debug!(error = %self, "query rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
