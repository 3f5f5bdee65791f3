//! Wire types for `POST /query`.

use serde::{Deserialize, Serialize};

/// Request body: `{"query": "..."}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Success body: `{"answer": "..."}`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AgentAnswer {
    pub answer: String,
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
