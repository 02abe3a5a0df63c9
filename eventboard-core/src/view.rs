//! Display surface the board renders into.
//!
//! Each method corresponds to one slot of the host page: the events
//! container and its pagination controls, the countdown section with its
//! title and day/hour/minute/second fields. The proposal form's button and
//! feedback line have their own trait.

use crate::countdown::Remaining;
use crate::form::{Feedback, SubmitButton};
use crate::pagination::Page;

pub const LOADING_MESSAGE: &str = "Connecting to database...";
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load events at this time.";
pub const NO_EVENTS_MESSAGE: &str = "No upcoming events found.";
pub const NEXT_UP_BADGE: &str = "UP NEXT";
pub const STARTED_MESSAGE: &str = "The Event Has Started!";

pub trait BoardView {
    /// Shown in the events container while the fetch is in flight.
    fn show_loading(&mut self);

    /// Replaces the events container when the fetch fails.
    fn show_load_error(&mut self);

    /// Render a page of event cards plus its controls.
    ///
    /// An empty page shows the "no events" message and no controls.
    fn show_page(&mut self, page: &Page<'_>);

    fn reveal_countdown(&mut self, title: &str);

    fn show_countdown(&mut self, remaining: &Remaining);

    fn show_started(&mut self);
}

/// Display surface for the proposal form.
pub trait FormView {
    /// Called whenever the submit button's state or label changes.
    fn show_button(&mut self, button: &SubmitButton);

    fn show_feedback(&mut self, feedback: &Feedback);

    /// The feedback line timed out.
    fn clear_feedback(&mut self);
}
