//! `/tasks` endpoints

use super::ApiClient;
use crate::auth::SessionPersistence;
use crate::error::Result;
use crate::models::{Task, TaskDraft, TaskId, TaskStatus};

impl<S: SessionPersistence> ApiClient<S> {
    /// List tasks, optionally filtered by status.
    pub async fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>> {
        let query: Vec<(&str, String)> = status
            .map(|status| ("status", status.to_string()))
            .into_iter()
            .collect();
        self.get_json("tasks", &query).await
    }

    pub async fn get_task(&self, id: TaskId) -> Result<Task> {
        self.get_json(&format!("tasks/{id}"), &[]).await
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        self.post_json("tasks", draft).await
    }

    /// Replace a task with the given full representation.
    pub async fn update_task(&self, task: &Task) -> Result<Task> {
        self.put_json(&format!("tasks/{}", task.id), task).await
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.delete(&format!("tasks/{id}")).await
    }
}
