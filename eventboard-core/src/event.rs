//! Event records as published by the spreadsheet endpoint.
//!
//! Records are produced remotely and never mutated locally. Only records
//! whose status is `Approved` are ever shown on the board.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single event row from the spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
    /// "Learn more" URL; kept as text since rows may hold anything here
    #[serde(default, deserialize_with = "deserialize_text")]
    pub link: String,
    #[serde(default)]
    pub status: EventStatus,
}

/// Moderation status of an event row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
    /// Anything else an admin typed into the status column
    #[serde(other)]
    Unknown,
}

/// Stable identifier of an event: its title and date.
///
/// Outlives the store it came from, so the countdown can name its target.
/// Duplicate rows share a key; use store indices to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub title: String,
    pub date: DateTime<Utc>,
}

impl Event {
    pub fn key(&self) -> EventKey {
        EventKey {
            title: self.title.clone(),
            date: self.date,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == EventStatus::Approved
    }

    /// Whether the event is strictly in the future relative to `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }
}

/// Parse the date formats the spreadsheet is known to emit.
///
/// Accepts RFC 3339, naive date-times (taken as UTC) and bare dates
/// (midnight UTC).
pub fn parse_event_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_event_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid event date '{raw}'")))
}

/// Blank spreadsheet cells come through as `null`.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn parses_rfc3339_dates() {
        assert_eq!(
            parse_event_date("2025-03-20T15:00:00.000Z"),
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap())
        );
        assert_eq!(
            parse_event_date("2025-03-20T17:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_naive_dates_as_utc() {
        assert_eq!(
            parse_event_date("2025-03-20T15:00"),
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap())
        );
        assert_eq!(
            parse_event_date("2025-03-20 15:00:30"),
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 30).unwrap())
        );
        assert_eq!(
            parse_event_date("2025-03-20"),
            Some(Utc.with_ymd_and_hms(2025, 3, 20, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_event_date("next friday"), None);
        assert_eq!(parse_event_date(""), None);
    }

    #[test]
    fn deserializes_sheet_row() {
        let event: Event = serde_json::from_value(json!({
            "title": "Hack Night",
            "date": "2030-01-01T18:00:00.000Z",
            "location": "Lab 3",
            "description": "Bring a laptop",
            "link": "https://example.com/hack",
            "status": "Approved"
        }))
        .unwrap();

        assert_eq!(event.title, "Hack Night");
        assert_eq!(event.date, Utc.with_ymd_and_hms(2030, 1, 1, 18, 0, 0).unwrap());
        assert_eq!(event.location, "Lab 3");
        assert!(event.is_approved());
    }

    #[test]
    fn blank_cells_become_empty_text() {
        let event: Event = serde_json::from_value(json!({
            "title": "Meetup",
            "date": "2030-01-01",
            "location": null,
            "status": "Pending"
        }))
        .unwrap();

        assert_eq!(event.location, "");
        assert_eq!(event.description, "");
        assert_eq!(event.link, "");
        assert_eq!(event.status, EventStatus::Pending);
    }

    #[test]
    fn unknown_status_is_not_approved() {
        let event: Event = serde_json::from_value(json!({
            "title": "Meetup",
            "date": "2030-01-01",
            "status": "approved?"
        }))
        .unwrap();

        assert_eq!(event.status, EventStatus::Unknown);
        assert!(!event.is_approved());
    }

    #[test]
    fn key_identifies_by_title_and_date() {
        let event: Event = serde_json::from_value(json!({
            "title": "Meetup",
            "date": "2030-01-01",
            "status": "Approved"
        }))
        .unwrap();
        let key = event.key();

        assert_eq!(key.title, "Meetup");

        let mut renamed = event.clone();
        renamed.title = "Other".to_string();
        assert_ne!(renamed.key(), key);
    }
}
