use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// A chat session with an append-only transcript.
///
/// Entries are never mutated or removed. A session is owned by exactly one
/// chat loop; nothing outside that loop touches its transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub transcript: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            transcript: Vec::new(),
        }
    }

    pub fn add_message(&mut self, role: &str, content: &str) {
        self.transcript.push(Message {
            role: role.to_string(),
            content: content.to_string(),
        });
    }
}
