//! Assistant chat transcript and reply normalization.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;

use crate::error::{Error, Result};

pub const GREETING: &str = "Hi! I'm your Moodicat assistant. How are you feeling today? 🐱";
pub const CONNECTION_FAILURE: &str =
    "Sorry, I'm having trouble connecting. Please try again later.";
const EMPTY_REPLY: &str = "Sorry, I couldn't process that request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// Server resources an assistant reply may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Tasks,
    Diary,
    Reminders,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub id: Option<i64>,
}

/// Normalized assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub actions: Vec<ChatAction>,
}

#[derive(Debug, Deserialize)]
struct StructuredReply {
    reply: String,
    #[serde(default)]
    actions: Option<Vec<ChatAction>>,
}

impl ChatReply {
    /// Interpret a raw `/ai/chat` response body.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self::text(EMPTY_REPLY);
        }

        let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
            return Self::text(trimmed);
        };

        match value {
            serde_json::Value::String(text) if text.trim().is_empty() => Self::text(EMPTY_REPLY),
            serde_json::Value::String(text) => Self::text(text.trim()),
            serde_json::Value::Object(ref map) => {
                if let Some(tool) = map.get("tool_name").and_then(serde_json::Value::as_str) {
                    return Self::text(format!("I'm processing your request using {tool}..."));
                }
                if let Ok(structured) = serde_json::from_value::<StructuredReply>(value.clone()) {
                    return Self {
                        text: structured.reply,
                        actions: structured.actions.unwrap_or_default(),
                    };
                }
                Self::text(value.to_string())
            }
            serde_json::Value::Null => Self::text(EMPTY_REPLY),
            // Bare numbers, booleans and arrays are shown as they came.
            _ => Self::text(trimmed),
        }
    }

    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
        }
    }

    /// Caches that should be refreshed after this reply.
    ///
    /// Without structured actions the assistant's tools may have written
    /// tasks or diary entries, so both are reported.
    #[must_use]
    pub fn touched_resources(&self) -> BTreeSet<Resource> {
        if self.actions.is_empty() {
            return BTreeSet::from([Resource::Tasks, Resource::Diary]);
        }

        self.actions
            .iter()
            .filter_map(|action| {
                let kind = action.kind.to_lowercase();
                if kind.contains("reminder") {
                    Some(Resource::Reminders)
                } else if kind.contains("task") {
                    Some(Resource::Tasks)
                } else if kind.contains("diary") || kind.contains("entry") {
                    Some(Resource::Diary)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Assistant message to show when a chat request fails.
pub fn failure_message(error: &Error) -> String {
    error
        .server_message()
        .map_or_else(|| CONNECTION_FAILURE.to_string(), ToString::to_string)
}

/// Local conversation log shown in the chat panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: bool,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
            pending: false,
        };
        transcript.push(ChatRole::Assistant, GREETING.to_string());
        transcript
    }
}

impl ChatTranscript {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user message and mark a reply as pending.
    ///
    /// Returns the trimmed text to send.
    pub fn begin_send(&mut self, input: &str) -> Result<String> {
        if self.pending {
            return Err(Error::InvalidInput(
                "Please wait for the current reply".to_string(),
            ));
        }
        let text = input.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("Message cannot be empty".to_string()));
        }

        self.push(ChatRole::User, input.to_string());
        self.pending = true;
        Ok(text.to_string())
    }

    pub fn complete(&mut self, reply: &ChatReply) {
        self.pending = false;
        self.push(ChatRole::Assistant, reply.text.clone());
    }

    pub fn fail(&mut self, message: String) {
        self.pending = false;
        self.push(ChatRole::Assistant, message);
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            timestamp: Local::now().naive_local(),
        });
        self.next_id += 1;
    }
}
