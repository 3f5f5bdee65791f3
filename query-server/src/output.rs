//! Normalizes the graph's loosely typed output into [`AgentOutput`] and picks
//! the final answer.

use agent_graph::MESSAGES_KEY;
use serde_json::Value;

/// Graph output as seen by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutput {
    /// The output was a mapping with a `messages` sequence; one text per element.
    Structured { messages: Vec<String> },
    /// Anything else, as text.
    Opaque { text: String },
}

/// The output carried no answer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("agent returned no messages")]
    NoMessages,
    #[error("agent returned an empty answer")]
    EmptyAnswer,
}

impl AgentOutput {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove(MESSAGES_KEY) {
                Some(Value::Array(items)) => AgentOutput::Structured {
                    messages: items.into_iter().map(message_text).collect(),
                },
                Some(other) => {
                    map.insert(MESSAGES_KEY.to_string(), other);
                    AgentOutput::Opaque {
                        text: Value::Object(map).to_string(),
                    }
                }
                None => AgentOutput::Opaque {
                    text: Value::Object(map).to_string(),
                },
            },
            Value::String(text) => AgentOutput::Opaque { text },
            other => AgentOutput::Opaque {
                text: other.to_string(),
            },
        }
    }

    /// Last message of a structured output, or the opaque text. Blank answers are errors.
    pub fn final_answer(self) -> Result<String, ExtractionError> {
        let answer = match self {
            AgentOutput::Structured { mut messages } => {
                messages.pop().ok_or(ExtractionError::NoMessages)?
            }
            AgentOutput::Opaque { text } => text,
        };
        if answer.trim().is_empty() {
            return Err(ExtractionError::EmptyAnswer);
        }
        Ok(answer)
    }
}

/// `content` text of a message object, a bare string as is, else its JSON text.
fn message_text(item: Value) -> String {
    match item {
        Value::String(s) => s,
        Value::Object(mut map) => match map.remove("content") {
            Some(Value::String(s)) => s,
            Some(content) => {
                map.insert("content".to_string(), content);
                Value::Object(map).to_string()
            }
            None => Value::Object(map).to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// **Scenario**: The answer is the last of three messages.
    #[test]
    fn structured_picks_last_message() {
        let out = AgentOutput::from_value(json!({
            "messages": [
                {"role": "system", "content": "A"},
                {"role": "user", "content": "B"},
                {"role": "assistant", "content": "C"}
            ]
        }));
        assert_eq!(
            out,
            AgentOutput::Structured {
                messages: vec!["A".into(), "B".into(), "C".into()]
            }
        );
        assert_eq!(out.final_answer().unwrap(), "C");
    }

    #[test]
    fn structured_accepts_bare_strings() {
        let out = AgentOutput::from_value(json!({ "messages": ["q", "a"] }));
        assert_eq!(out.final_answer().unwrap(), "a");
    }

    #[test]
    fn structured_non_text_content_is_json_text() {
        let out = AgentOutput::from_value(json!({ "messages": [{"content": [1, 2]}, 7] }));
        match out {
            AgentOutput::Structured { messages } => {
                assert_eq!(messages[0], r#"{"content":[1,2]}"#);
                assert_eq!(messages[1], "7");
            }
            other => panic!("expected structured, got {:?}", other),
        }
    }

    #[test]
    fn empty_messages_is_an_extraction_error() {
        let out = AgentOutput::from_value(json!({ "messages": [] }));
        assert_eq!(out.final_answer(), Err(ExtractionError::NoMessages));
    }

    /// **Scenario**: A blank last message is not an answer, even after earlier non-empty ones.
    #[test]
    fn blank_last_message_is_an_extraction_error() {
        let out = AgentOutput::from_value(json!({
            "messages": [{"content": "question"}, {"content": "  "}]
        }));
        assert_eq!(out.final_answer(), Err(ExtractionError::EmptyAnswer));
        assert_eq!(
            AgentOutput::from_value(json!("")).final_answer(),
            Err(ExtractionError::EmptyAnswer)
        );
    }

    /// **Scenario**: A plain string output is returned verbatim.
    #[test]
    fn string_output_is_opaque_verbatim() {
        let out = AgentOutput::from_value(json!("plain answer"));
        assert_eq!(out.final_answer().unwrap(), "plain answer");
    }

    #[test]
    fn other_values_are_opaque_json_text() {
        assert_eq!(
            AgentOutput::from_value(json!(42)).final_answer().unwrap(),
            "42"
        );
        assert_eq!(
            AgentOutput::from_value(json!({ "messages": "nope" }))
                .final_answer()
                .unwrap(),
            r#"{"messages":"nope"}"#
        );
        assert_eq!(
            AgentOutput::from_value(json!({ "answer": "x" }))
                .final_answer()
                .unwrap(),
            r#"{"answer":"x"}"#
        );
    }
}
