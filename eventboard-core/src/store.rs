//! In-memory store of approved events for one board load.

use chrono::{DateTime, Utc};

use crate::event::Event;

/// Approved events in fetch order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store from raw endpoint records.
    ///
    /// Records that don't deserialize are skipped with a warning, and only
    /// approved events are kept.
    pub fn from_records(records: Vec<serde_json::Value>) -> Self {
        let events = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Event>(record) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed event record");
                    None
                }
            });

        Self::from_events(events)
    }

    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Self {
        let events: Vec<Event> = events.into_iter().filter(Event::is_approved).collect();
        tracing::debug!(count = events.len(), "Loaded approved events");
        EventStore { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The approved event with the earliest date strictly after `now`.
    ///
    /// Ties resolve to the first such event in fetch order.
    pub fn next_up(&self, now: DateTime<Utc>) -> Option<&Event> {
        self.next_up_index(now).map(|i| &self.events[i])
    }

    /// Position of [`next_up`](Self::next_up) in [`events`](Self::events).
    pub fn next_up_index(&self, now: DateTime<Utc>) -> Option<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_upcoming(now))
            .min_by_key(|(_, e)| e.date)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{approved, event_at};
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    #[test]
    fn keeps_only_approved_records_in_fetch_order() {
        let store = EventStore::from_records(vec![
            json!({"title": "A", "date": "2030-01-01", "status": "Approved"}),
            json!({"title": "B", "date": "2030-01-02", "status": "Pending"}),
            json!({"title": "C", "date": "2029-01-01", "status": "Approved"}),
            json!({"title": "D", "date": "2030-01-03", "status": "Rejected"}),
        ]);

        let titles: Vec<_> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn skips_malformed_records() {
        let store = EventStore::from_records(vec![
            json!({"title": "Good", "date": "2030-01-01", "status": "Approved"}),
            json!({"title": "No date", "status": "Approved"}),
            json!({"title": "Bad date", "date": "soon", "status": "Approved"}),
            json!("not an object"),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0].title, "Good");
    }

    #[test]
    fn next_up_is_earliest_future_event() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let store = EventStore::from_events(vec![
            approved("Past", "2025-01-01"),
            approved("Far", "2099-01-01"),
            approved("Soon", "2030-01-01"),
        ]);

        assert_eq!(store.next_up(now).map(|e| e.title.as_str()), Some("Soon"));
    }

    #[test]
    fn next_up_excludes_events_happening_now() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let store = EventStore::from_events(vec![
            event_at("Now", now),
            event_at("Later", now + Duration::seconds(1)),
        ]);

        assert_eq!(store.next_up(now).map(|e| e.title.as_str()), Some("Later"));
    }

    #[test]
    fn next_up_ignores_unapproved_events() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut pending = approved("Pending", "2027-01-01");
        pending.status = crate::event::EventStatus::Pending;
        let store = EventStore::from_events(vec![pending, approved("Approved", "2028-01-01")]);

        assert_eq!(store.next_up(now).map(|e| e.title.as_str()), Some("Approved"));
    }

    #[test]
    fn duplicate_rows_resolve_to_the_first() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let store = EventStore::from_events(vec![
            approved("Past", "2025-01-01"),
            approved("Meetup", "2030-01-01"),
            approved("Meetup", "2030-01-01"),
        ]);

        assert_eq!(store.next_up_index(now), Some(1));
    }

    #[test]
    fn no_next_up_when_everything_is_past() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let store = EventStore::from_events(vec![approved("Past", "2025-01-01")]);

        assert!(store.next_up(now).is_none());
    }
}
