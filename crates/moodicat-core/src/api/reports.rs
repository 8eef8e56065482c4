//! `/reports` endpoints

use chrono::NaiveDate;

use super::ApiClient;
use crate::auth::SessionPersistence;
use crate::error::Result;
use crate::models::{DailySummary, TrendPeriod};
use crate::reports::{parse_mood_trend, parse_today_mood, MoodTrend};

impl<S: SessionPersistence> ApiClient<S> {
    pub async fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary> {
        self.get_json("reports/daily-summary", &[("date", date.to_string())])
            .await
    }

    /// Mood trend; the server sends the JSON array as a string body.
    pub async fn mood_trend(&self, period: TrendPeriod) -> Result<MoodTrend> {
        let raw = self
            .get_text("reports/mood-trend", &[("period", period.to_string())])
            .await?;
        parse_mood_trend(&raw)
    }

    /// Today's dominant mood label, if the server produced one.
    pub async fn today_mood(&self) -> Result<Option<String>> {
        let raw = self.get_text("reports/today-mood-summary", &[]).await?;
        Ok(parse_today_mood(&raw))
    }
}
