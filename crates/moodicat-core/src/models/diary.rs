//! Diary entry models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{normalize_text_option, today};

pub type EntryId = i64;

/// A dated free-text note with an optional mood label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: EntryId,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub ai_sentiment_score: Option<f32>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl DiaryEntry {
    /// Title for display, with a placeholder for untitled entries.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or("(No title)")
    }

    #[must_use]
    pub fn display_content(&self) -> &str {
        self.content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
            .unwrap_or("(No content)")
    }

    /// Draft pre-filled from this entry, used by the edit form.
    #[must_use]
    pub fn to_draft(&self) -> DiaryDraft {
        DiaryDraft {
            title: self.title.clone(),
            content: self.content.clone().unwrap_or_default(),
            mood: self.mood.clone(),
            entry_date: self.entry_date,
        }
    }
}

/// Payload for creating or updating a diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<NaiveDate>,
}

impl DiaryDraft {
    /// Build a draft from form input, trimming optional fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        mood: Option<String>,
        entry_date: NaiveDate,
    ) -> Result<Self> {
        let draft = Self {
            title: normalize_text_option(Some(title.into())),
            content: content.into().trim().to_string(),
            mood: normalize_text_option(mood),
            entry_date: Some(entry_date),
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Diary content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Inclusive date range used to filter diary entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiaryRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DiaryRange {
    fn default() -> Self {
        Self::single_day(today())
    }
}

impl DiaryRange {
    /// Build a range, swapping the bounds when they are reversed.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Query parameters in the format the backend expects.
    #[must_use]
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("startDate", self.start.to_string()),
            ("endDate", self.end.to_string()),
        ]
    }
}
