//! Report models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::diary::DiaryEntry;
use super::task::Task;

/// Per-day summary produced by `/reports/daily-summary`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub tasks_completed: u64,
    #[serde(default)]
    pub tasks_pending: u64,
    #[serde(default)]
    pub ai_suggestion: Option<String>,
    #[serde(default)]
    pub mood_analysis: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<DiaryEntry>,
}

impl DailySummary {
    #[must_use]
    pub fn suggestion_text(&self) -> &str {
        self.ai_suggestion
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or("No suggestions available")
    }

    #[must_use]
    pub fn mood_analysis_text(&self) -> Option<&str> {
        self.mood_analysis
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Dominant mood for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    pub date: NaiveDate,
    pub mood: String,
}

/// Window for the mood trend report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrendPeriod {
    Last7Days,
    #[default]
    Last30Days,
}

impl TrendPeriod {
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Last7Days => "last7days",
            Self::Last30Days => "last30days",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
