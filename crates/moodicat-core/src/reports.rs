//! Parsing for the AI-generated report payloads.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::MoodTrendPoint;

/// Daily dominant moods over a period, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoodTrend {
    pub points: Vec<MoodTrendPoint>,
}

impl MoodTrend {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most frequent normalized mood; ties go to the earliest day.
    #[must_use]
    pub fn dominant_mood(&self) -> Option<String> {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for (index, point) in self.points.iter().enumerate() {
            let mood = point.mood.trim().to_lowercase();
            if mood.is_empty() {
                continue;
            }
            counts.entry(mood).or_insert((0, index)).0 += 1;
        }

        counts
            .into_iter()
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                count_a.cmp(count_b).then(first_b.cmp(first_a))
            })
            .map(|(mood, _)| mood)
    }
}

/// Parse the mood trend body.
///
/// The server serializes the array itself, so the body may arrive either as
/// the raw array or double-encoded as a JSON string.
pub fn parse_mood_trend(raw: &str) -> Result<MoodTrend> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(MoodTrend::default());
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)
        .map_err(|error| Error::InvalidPayload(format!("mood trend is not JSON: {error}")))?;

    let value = match value {
        serde_json::Value::String(inner) => {
            let inner = inner.trim();
            if inner.is_empty() {
                return Ok(MoodTrend::default());
            }
            serde_json::from_str(inner).map_err(|error| {
                Error::InvalidPayload(format!("mood trend is not JSON: {error}"))
            })?
        }
        other => other,
    };

    if !value.is_array() {
        return Err(Error::InvalidPayload(
            "mood trend must be a JSON array".to_string(),
        ));
    }

    let mut points: Vec<MoodTrendPoint> = serde_json::from_value(value)?;
    points.sort_by_key(|point| point.date);
    Ok(MoodTrend { points })
}

/// Clean up the plain-text today-mood body.
pub fn parse_today_mood(raw: &str) -> Option<String> {
    let mood = raw.trim().trim_matches('"').trim();
    if mood.is_empty() {
        None
    } else {
        Some(mood.to_string())
    }
}
