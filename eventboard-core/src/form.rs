//! The "organize an event" proposal form.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::source::EventSource;
use crate::view::FormView;

pub const SUBMIT_LABEL: &str = "Submit Proposal";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "Proposal submitted! An admin will review it shortly.";
pub const FAILURE_MESSAGE: &str = "Submission failed. Please try again.";

/// How long a feedback message stays up.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(5);

/// Plain-text fields of a proposal, serialized as the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Feedback {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: String,
}

/// Form state: the four fields, the submit button and the feedback line.
#[derive(Debug, Clone)]
pub struct ProposalForm {
    fields: Proposal,
    button: SubmitButton,
    feedback: Option<Feedback>,
    feedback_ttl: Duration,
}

impl Default for ProposalForm {
    fn default() -> Self {
        Self::new(FEEDBACK_TTL)
    }
}

impl ProposalForm {
    pub fn new(feedback_ttl: Duration) -> Self {
        ProposalForm {
            fields: Proposal::default(),
            button: SubmitButton {
                disabled: false,
                label: SUBMIT_LABEL.to_string(),
            },
            feedback: None,
            feedback_ttl,
        }
    }

    pub fn feedback_ttl(&self) -> Duration {
        self.feedback_ttl
    }

    pub fn fields(&self) -> &Proposal {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Proposal {
        &mut self.fields
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Current feedback, unless it has already timed out.
    pub fn feedback(&self, now: DateTime<Utc>) -> Option<&Feedback> {
        self.feedback.as_ref().filter(|f| !f.is_expired(now))
    }

    pub fn reset(&mut self) {
        self.fields = Proposal::default();
    }

    /// Send the form contents to `source`.
    ///
    /// The button is disabled and relabelled while the request is in flight,
    /// and `view` sees each change. Success is assumed whenever the request
    /// went out; the form is then cleared. On a transport error the fields
    /// are kept for another try.
    pub async fn submit<S, V>(&mut self, source: &S, view: &mut V) -> &Feedback
    where
        S: EventSource + ?Sized,
        V: FormView + ?Sized,
    {
        let original_label = std::mem::replace(&mut self.button.label, SUBMITTING_LABEL.to_string());
        self.button.disabled = true;
        view.show_button(&self.button);

        let outcome = source.submit_proposal(&self.fields).await;

        let (kind, message) = match outcome {
            Ok(()) => {
                self.reset();
                (FeedbackKind::Success, SUCCESS_MESSAGE)
            }
            Err(e) => {
                tracing::error!(error = %e, "Submission error");
                (FeedbackKind::Error, FAILURE_MESSAGE)
            }
        };

        self.button.disabled = false;
        self.button.label = original_label;
        view.show_button(&self.button);

        let feedback = self.feedback.insert(Feedback {
            kind,
            message: message.to_string(),
            expires_at: expiry(Utc::now(), self.feedback_ttl),
        });
        view.show_feedback(feedback);
        feedback
    }

    /// Wait out the feedback line, then clear it from the form and `view`.
    pub async fn expire_feedback<V>(&mut self, view: &mut V)
    where
        V: FormView + ?Sized,
    {
        if self.feedback.is_none() {
            return;
        }

        tokio::time::sleep(self.feedback_ttl).await;
        self.feedback = None;
        view.clear_feedback();
    }
}

/// `now + ttl`, saturating at the latest representable time.
fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
