//! Task models

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

pub type TaskId = i64;

/// Lifecycle state of a task.
///
/// Parsed case-insensitively; always emitted lowercase. The backend stores
/// whatever string it is sent, so decoding maps null or unknown values to
/// [`TaskStatus::Pending`] instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(Error::InvalidPayload(format!("unknown task status: {other}"))),
        }
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or_else(Self::default, |raw| {
            raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Unknown task status {:?}; treating as pending", raw);
                Self::Pending
            })
        }))
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Task {
    /// Priority for display; tasks without one show as medium.
    #[must_use]
    pub fn effective_priority(&self) -> TaskPriority {
        self.priority.unwrap_or_default()
    }

    /// Copy of this task with its completion toggled.
    ///
    /// Completed tasks go back to pending; anything else becomes completed.
    #[must_use]
    pub fn toggled(&self) -> Self {
        let status = if self.status.is_completed() {
            TaskStatus::Pending
        } else {
            TaskStatus::Completed
        };
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl TaskDraft {
    /// Quick-add task: pending, no description, due on `today`.
    pub fn quick(title: &str, today: NaiveDate) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("Task title cannot be empty".to_string()));
        }
        Ok(Self {
            title: title.to_string(),
            description: String::new(),
            status: TaskStatus::Pending,
            due_date: Some(today),
            priority: None,
        })
    }
}

/// Completion counts for a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskProgress {
    pub completed: usize,
    pub total: usize,
}

impl TaskProgress {
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            completed: tasks.iter().filter(|task| task.status.is_completed()).count(),
            total: tasks.len(),
        }
    }

    /// Completed share as a whole percentage, 0 for an empty list.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = self.completed * 100 / self.total;
        u8::try_from(percent.min(100)).unwrap_or(100)
    }
}
