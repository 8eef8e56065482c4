//! `/reminders` endpoints

use super::ApiClient;
use crate::auth::SessionPersistence;
use crate::error::Result;
use crate::models::{Reminder, ReminderDraft, ReminderId};

impl<S: SessionPersistence> ApiClient<S> {
    pub async fn list_reminders(&self) -> Result<Vec<Reminder>> {
        self.get_json("reminders", &[]).await
    }

    pub async fn create_reminder(&self, draft: &ReminderDraft) -> Result<Reminder> {
        self.post_json("reminders", draft).await
    }

    pub async fn delete_reminder(&self, id: ReminderId) -> Result<()> {
        self.delete(&format!("reminders/{id}")).await
    }
}
