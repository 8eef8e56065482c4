//! Reminder models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::task::TaskId;
use crate::error::{Error, Result};

pub type ReminderId = i64;

const TIME_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// A scheduled notification tied to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ReminderId,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub task_id: TaskId,
    pub reminder_time: NaiveDateTime,
    // Bean-style serializers drop the `is` prefix of boolean getters.
    #[serde(default, alias = "sent")]
    pub is_sent: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for creating a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDraft {
    pub task_id: TaskId,
    pub reminder_time: NaiveDateTime,
}

impl ReminderDraft {
    /// Validate reminder form input.
    ///
    /// `time_input` is the value of a `datetime-local` field.
    pub fn parse(task_id: Option<TaskId>, time_input: &str) -> Result<Self> {
        let task_id = task_id
            .filter(|id| *id >= 1)
            .ok_or_else(|| Error::InvalidInput("Please select a task".to_string()))?;

        let time_input = time_input.trim();
        if time_input.is_empty() {
            return Err(Error::InvalidInput("Reminder time is required".to_string()));
        }

        let reminder_time = TIME_INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(time_input, format).ok())
            .ok_or_else(|| {
                Error::InvalidInput(format!("Unrecognized reminder time: {time_input}"))
            })?;

        Ok(Self {
            task_id,
            reminder_time,
        })
    }
}
