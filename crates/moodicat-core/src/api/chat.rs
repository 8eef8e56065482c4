//! `/ai/chat` and `/chat-sessions` endpoints

use serde_json::json;

use super::ApiClient;
use crate::auth::SessionPersistence;
use crate::chat::ChatReply;
use crate::error::{Error, Result};
use crate::models::{ChatMessageRecord, ChatSession};

impl<S: SessionPersistence> ApiClient<S> {
    /// Send a message to the assistant and normalize its reply.
    pub async fn send_chat(&self, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::InvalidInput("Message cannot be empty".to_string()));
        }
        let body = self
            .post_text("ai/chat", &json!({ "message": message }))
            .await?;
        Ok(ChatReply::from_body(&body))
    }

    pub async fn list_chat_sessions(&self) -> Result<Vec<ChatSession>> {
        self.get_json("chat-sessions", &[]).await
    }

    pub async fn create_chat_session(&self, title: Option<&str>) -> Result<ChatSession> {
        tracing::debug!("POST chat-sessions");
        let query: Vec<(&str, String)> = title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(|title| ("title", title.to_string()))
            .into_iter()
            .collect();
        let request = self.client.post(self.url("chat-sessions")).query(&query);
        Ok(self.execute(request).await?.json::<ChatSession>().await?)
    }

    pub async fn chat_session_messages(&self, session_id: &str) -> Result<Vec<ChatMessageRecord>> {
        tracing::debug!("GET chat-sessions/{}/messages", session_id);
        let url = self.segment_url(&["chat-sessions", session_id, "messages"])?;
        Ok(self
            .execute(self.client.get(url))
            .await?
            .json::<Vec<ChatMessageRecord>>()
            .await?)
    }

    pub async fn delete_chat_session(&self, session_id: &str) -> Result<()> {
        tracing::debug!("DELETE chat-sessions/{}", session_id);
        let url = self.segment_url(&["chat-sessions", session_id])?;
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }
}
