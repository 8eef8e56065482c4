//! `/diary-entries` endpoints

use super::ApiClient;
use crate::auth::SessionPersistence;
use crate::error::Result;
use crate::models::{DiaryDraft, DiaryEntry, DiaryRange, EntryId};

impl<S: SessionPersistence> ApiClient<S> {
    pub async fn list_entries(&self, range: DiaryRange) -> Result<Vec<DiaryEntry>> {
        self.get_json("diary-entries", &range.query_params()).await
    }

    pub async fn get_entry(&self, id: EntryId) -> Result<DiaryEntry> {
        self.get_json(&format!("diary-entries/{id}"), &[]).await
    }

    pub async fn create_entry(&self, draft: &DiaryDraft) -> Result<DiaryEntry> {
        draft.validate()?;
        self.post_json("diary-entries", draft).await
    }

    pub async fn update_entry(&self, id: EntryId, draft: &DiaryDraft) -> Result<DiaryEntry> {
        draft.validate()?;
        self.put_json(&format!("diary-entries/{id}"), draft).await
    }

    pub async fn delete_entry(&self, id: EntryId) -> Result<()> {
        self.delete(&format!("diary-entries/{id}")).await
    }
}
