//! Data models for Moodicat
//!
//! These mirror the REST resources exposed by the backend. Wire format is
//! camelCase JSON.

mod chat;
mod diary;
mod reminder;
mod report;
mod task;
mod user;

pub use chat::{ChatMessageRecord, ChatSession};
pub use diary::{DiaryDraft, DiaryEntry, DiaryRange, EntryId};
pub use reminder::{Reminder, ReminderDraft, ReminderId};
pub use report::{DailySummary, MoodTrendPoint, TrendPeriod};
pub use task::{Task, TaskDraft, TaskId, TaskPriority, TaskProgress, TaskStatus};
pub use user::{LoginResponse, User, UserInfo};
