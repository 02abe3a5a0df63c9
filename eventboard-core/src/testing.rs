//! Fakes shared by the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::countdown::Remaining;
use crate::error::{BoardError, BoardResult};
use crate::event::{Event, EventStatus, parse_event_date};
use crate::form::{Feedback, Proposal, SubmitButton};
use crate::pagination::Page;
use crate::source::EventSource;
use crate::view::{BoardView, FormView};

pub fn event_at(title: &str, date: DateTime<Utc>) -> Event {
    Event {
        title: title.to_string(),
        date,
        location: "Main Hall".to_string(),
        description: format!("About {title}"),
        link: "https://example.com".to_string(),
        status: EventStatus::Approved,
    }
}

pub fn approved(title: &str, date: &str) -> Event {
    event_at(title, parse_event_date(date).unwrap())
}

/// `count` approved events, one day apart, starting 2030-01-01.
pub fn numbered_events(count: usize) -> Vec<Event> {
    let first = Utc.with_ymd_and_hms(2030, 1, 1, 18, 0, 0).unwrap();
    (0..count)
        .map(|i| event_at(&format!("Event {}", i + 1), first + Duration::days(i as i64)))
        .collect()
}

#[derive(Default)]
pub struct FakeSource {
    records: Vec<serde_json::Value>,
    fail: bool,
    submitted: Mutex<Vec<Proposal>>,
}

impl FakeSource {
    pub fn with_records(records: Vec<serde_json::Value>) -> Self {
        FakeSource {
            records,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        FakeSource {
            fail: true,
            ..Default::default()
        }
    }

    pub fn submitted(&self) -> Vec<Proposal> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSource for FakeSource {
    async fn fetch_records(&self) -> BoardResult<Vec<serde_json::Value>> {
        if self.fail {
            return Err(BoardError::Fetch("connection refused".into()));
        }
        Ok(self.records.clone())
    }

    async fn submit_proposal(&self, proposal: &Proposal) -> BoardResult<()> {
        if self.fail {
            return Err(BoardError::Submit("connection refused".into()));
        }
        self.submitted.lock().unwrap().push(proposal.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Loading,
    LoadError,
    Page {
        number: usize,
        titles: Vec<String>,
        next_up: Option<String>,
        total_pages: usize,
    },
    RevealCountdown(String),
    Countdown(Remaining),
    Started,
    Button {
        disabled: bool,
        label: String,
    },
    Feedback(String),
    FeedbackCleared,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn rendered_titles(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::Page { titles, .. } => Some(titles.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl BoardView for RecordingView {
    fn show_loading(&mut self) {
        self.calls.push(ViewCall::Loading);
    }

    fn show_load_error(&mut self) {
        self.calls.push(ViewCall::LoadError);
    }

    fn show_page(&mut self, page: &Page<'_>) {
        self.calls.push(ViewCall::Page {
            number: page.number,
            titles: page.events.iter().map(|e| e.title.clone()).collect(),
            next_up: page.next_up.as_ref().map(|key| key.title.clone()),
            total_pages: page.controls.total_pages,
        });
    }

    fn reveal_countdown(&mut self, title: &str) {
        self.calls.push(ViewCall::RevealCountdown(title.to_string()));
    }

    fn show_countdown(&mut self, remaining: &Remaining) {
        self.calls.push(ViewCall::Countdown(*remaining));
    }

    fn show_started(&mut self) {
        self.calls.push(ViewCall::Started);
    }
}

impl FormView for RecordingView {
    fn show_button(&mut self, button: &SubmitButton) {
        self.calls.push(ViewCall::Button {
            disabled: button.disabled,
            label: button.label.clone(),
        });
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.calls.push(ViewCall::Feedback(feedback.message.clone()));
    }

    fn clear_feedback(&mut self) {
        self.calls.push(ViewCall::FeedbackCleared);
    }
}
