//! `POST /query`: forwards the query to the agent graph and returns its final answer.

use std::sync::Arc;

use agent_graph::MESSAGES_KEY;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::dto::{AgentAnswer, QueryRequest};
use crate::error::ServerError;
use crate::output::AgentOutput;
use crate::router::AppState;

pub async fn query(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AgentAnswer>), ServerError> {
    let Json(request) = payload?;
    if request.query.trim().is_empty() {
        return Err(ServerError::BadRequest("query must not be empty".to_string()));
    }
    info!(
        provider = %state.source.model_provider(),
        query_len = request.query.len(),
        "query received"
    );
    debug!(query = %request.query, "query text");

    let graph = state
        .source
        .acquire()
        .await
        .map_err(|e| ServerError::Agent(e.to_string()))?;

    if let Some(export) = &state.per_request_diagram {
        export.export_best_effort(graph.as_ref()).await;
    }

    let mut envelope = Map::new();
    envelope.insert(
        MESSAGES_KEY.to_string(),
        Value::Array(vec![Value::String(request.query)]),
    );
    let output = graph.invoke(Value::Object(envelope)).await?;

    let answer = AgentOutput::from_value(output).final_answer()?;
    info!(answer_len = answer.len(), "query answered");
    Ok((StatusCode::OK, Json(AgentAnswer { answer })))
}
