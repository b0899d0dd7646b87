use serde::{Deserialize, Serialize};

/// Chat-completion role enumeration.
///
/// Uses lowercase serialization to match the OpenAI-compatible wire format:
/// "system" | "user" | "assistant"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message in the outbound request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Outbound chat-completion request.
///
/// Only the fields this service actually sends: the fixed model identifier,
/// the system/user message pair, and the output-token ceiling. The provider's
/// response envelope is not modeled here; `crate::extract` reads it leniently
/// as JSON so unexpected shapes degrade instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roles_serialize_lowercase() {
        let req = ChatCompletionRequest {
            model: "test-model".into(),
            messages: vec![ChatMessage::system("persona"), ChatMessage::user("code")],
            max_tokens: 16,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "persona"},
                    {"role": "user", "content": "code"}
                ],
                "max_tokens": 16
            })
        );
    }
}
