// ABOUTME: Weight log entries recorded at user check-ins
// ABOUTME: Accepts RFC 3339 datetimes, naive datetimes, or plain dates for timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A single weight (and optional body fat) check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLogEntry {
    /// When the measurement was taken
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
}

impl WeightLogEntry {
    /// Create an entry without body fat
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, weight_kg: f64) -> Self {
        Self {
            timestamp,
            weight_kg,
            body_fat_pct: None,
        }
    }

    /// Create an entry dated at midnight UTC
    #[must_use]
    pub fn on_date(date: NaiveDate, weight_kg: f64) -> Self {
        Self::new(midnight_utc(date), weight_kg)
    }

    /// Attach a body fat reading
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat_pct: f64) -> Self {
        self.body_fat_pct = Some(body_fat_pct);
        self
    }

    /// Body fat reading when one was actually recorded (positive and finite)
    #[must_use]
    pub fn recorded_body_fat(&self) -> Option<f64> {
        self.body_fat_pct
            .filter(|pct| pct.is_finite() && *pct > 0.0)
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    NaiveDateTime::new(date, NaiveTime::MIN).and_utc()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(midnight_utc(date));
    }

    Err(D::Error::custom(format!(
        "invalid timestamp '{raw}': expected RFC 3339 datetime or YYYY-MM-DD date"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_plain_date_parses_as_midnight_utc() {
        let entry: WeightLogEntry =
            serde_json::from_str(r#"{"timestamp": "2024-03-04", "weight_kg": 82.5}"#).unwrap();
        assert_eq!(entry.timestamp.day(), 4);
        assert_eq!(entry.timestamp.hour(), 0);
        assert!(entry.body_fat_pct.is_none());
    }

    #[test]
    fn test_rfc3339_with_offset_normalizes_to_utc() {
        let entry: WeightLogEntry = serde_json::from_str(
            r#"{"timestamp": "2024-03-04T07:30:00+02:00", "weight_kg": 82.5, "body_fat_pct": 18.0}"#,
        )
        .unwrap();
        assert_eq!(entry.timestamp.hour(), 5);
        assert_eq!(entry.recorded_body_fat(), Some(18.0));
    }

    #[test]
    fn test_garbage_timestamp_rejected() {
        let result =
            serde_json::from_str::<WeightLogEntry>(r#"{"timestamp": "yesterday", "weight_kg": 80}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_body_fat_is_not_recorded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entry = WeightLogEntry::on_date(date, 80.0).with_body_fat(0.0);
        assert!(entry.recorded_body_fat().is_none());
    }
}
