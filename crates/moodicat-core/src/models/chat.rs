//! Persisted chat session models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored conversation with the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    #[serde(default)]
    pub id: Option<i64>,
    pub session_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// A message stored in a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub session_id: Option<i64>,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}
