//! Graph state and the invoke envelope.
//!
//! The chat graph uses a single state type, [`MessagesState`], that every node
//! reads and writes. Callers hand the runnable graph an envelope
//! `{"messages": [...]}`; [`MessagesState::from_envelope`] turns it into state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AgentError;
use crate::message::Message;

/// Key of the message sequence in both the input envelope and the output state.
pub const MESSAGES_KEY: &str = "messages";

/// Conversation state flowing through the chat graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesState {
    pub messages: Vec<Message>,
}

impl MessagesState {
    /// Builds state from an invoke envelope.
    ///
    /// Each element of `messages` may be a bare string (taken as a user
    /// message) or a `{"role", "content"}` object.
    pub fn from_envelope(envelope: Value) -> Result<Self, AgentError> {
        let mut map = match envelope {
            Value::Object(map) => map,
            other => {
                return Err(AgentError::InvalidEnvelope(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };
        let items = match map.remove(MESSAGES_KEY) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(AgentError::InvalidEnvelope(
                    "\"messages\" must be an array".into(),
                ))
            }
            None => {
                return Err(AgentError::InvalidEnvelope(
                    "missing \"messages\" key".into(),
                ))
            }
        };

        let messages = items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(Message::User(text)),
                other => serde_json::from_value::<Message>(other)
                    .map_err(|e| AgentError::InvalidEnvelope(e.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { messages })
    }
}
