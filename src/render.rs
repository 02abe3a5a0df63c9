//! Terminal rendering for the board.
//!
//! `TerminalView` is the board's and the proposal form's display surface on
//! a terminal, and the `Render` trait adds colored output to eventboard-core
//! types using owo_colors.

use std::io::{self, Write};

use eventboard_core::countdown::Remaining;
use eventboard_core::event::Event;
use eventboard_core::form::{Feedback, FeedbackKind, SubmitButton};
use eventboard_core::pagination::{EventCard, Page, PageControls};
use eventboard_core::view::{
    BoardView, FormView, LOAD_ERROR_MESSAGE, LOADING_MESSAGE, NEXT_UP_BADGE, NO_EVENTS_MESSAGE,
    STARTED_MESSAGE,
};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;

use crate::utils::tui;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventCard<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let mut lines = Vec::new();

        if self.is_next_up {
            lines.push(format!("🔥 {NEXT_UP_BADGE}").yellow().bold().to_string());
            lines.push(event.title.yellow().bold().to_string());
        } else {
            lines.push(event.title.bold().to_string());
        }

        lines.push(format!("   📅 {}", format_date(event)));
        if !event.location.is_empty() {
            lines.push(format!("   📍 {}", event.location));
        }
        if !event.description.is_empty() {
            lines.push(format!("   {}", event.description));
        }
        if !event.link.is_empty() {
            lines.push(format!("   {} {}", "Learn More:".dimmed(), event.link.underline()));
        }

        lines.join("\n")
    }
}

impl Render for PageControls {
    fn render(&self) -> String {
        let prev = if self.prev_enabled() {
            "‹ Prev".to_string()
        } else {
            "‹ Prev".dimmed().to_string()
        };
        let next = if self.next_enabled() {
            "Next ›".to_string()
        } else {
            "Next ›".dimmed().to_string()
        };

        format!("{}   {}   {}", prev, self.label(), next)
    }
}

impl Render for Remaining {
    fn render(&self) -> String {
        let [days, hours, minutes, seconds] = self.padded();
        format!(
            "{} {}  {} {}  {} {}  {} {}",
            days.bold(),
            "days".dimmed(),
            hours.bold(),
            "hours".dimmed(),
            minutes.bold(),
            "minutes".dimmed(),
            seconds.bold(),
            "seconds".dimmed(),
        )
    }
}

impl Render for Feedback {
    fn render(&self) -> String {
        match self.kind {
            FeedbackKind::Success => format!("✅ {}", self.message).green().to_string(),
            FeedbackKind::Error => format!("❌ {}", self.message).red().to_string(),
        }
    }
}

/// Format an event date as e.g. "March 20, 2025" in local time.
fn format_date(event: &Event) -> String {
    event
        .date
        .with_timezone(&chrono::Local)
        .format("%B %-d, %Y")
        .to_string()
}

/// Renders the board to stdout, with a spinner while loading or submitting.
#[derive(Default)]
pub struct TerminalView {
    spinner: Option<ProgressBar>,
    /// The countdown line is being redrawn in place
    ticking: bool,
    feedback: Option<ProgressBar>,
}

impl TerminalView {
    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// End an in-place countdown line so later output starts fresh.
    pub fn finish_line(&mut self) {
        if self.ticking {
            println!();
            self.ticking = false;
        }
    }
}

impl BoardView for TerminalView {
    fn show_loading(&mut self) {
        self.stop_spinner();
        self.spinner = Some(tui::spinner(LOADING_MESSAGE));
    }

    fn show_load_error(&mut self) {
        self.stop_spinner();
        println!("{}", LOAD_ERROR_MESSAGE.red());
    }

    fn show_page(&mut self, page: &Page<'_>) {
        self.stop_spinner();

        if page.is_empty() {
            println!("{}", NO_EVENTS_MESSAGE.dimmed());
            return;
        }

        for (i, card) in page.cards().iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", card.render());
        }

        if page.controls.is_visible() {
            println!();
            println!("{}", page.controls.render());
        }
    }

    fn reveal_countdown(&mut self, title: &str) {
        self.stop_spinner();
        println!("Counting down to: {}", title.yellow().bold());
    }

    fn show_countdown(&mut self, remaining: &Remaining) {
        print!("\r{}", remaining.render());
        if let Err(e) = io::stdout().flush() {
            tracing::debug!(error = %e, "Could not flush countdown line");
        }
        self.ticking = true;
    }

    fn show_started(&mut self) {
        self.finish_line();
        println!("{}", format!("{STARTED_MESSAGE} 🚀").bold());
    }
}

impl FormView for TerminalView {
    fn show_button(&mut self, button: &SubmitButton) {
        self.stop_spinner();
        if button.disabled {
            self.spinner = Some(tui::spinner(button.label.clone()));
        }
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        self.clear_feedback();
        let line = tui::status_line(feedback.render());
        if line.is_hidden() {
            // not a terminal, so keep the outcome in the output
            println!("{}", feedback.render());
        } else {
            self.feedback = Some(line);
        }
    }

    fn clear_feedback(&mut self) {
        if let Some(line) = self.feedback.take() {
            line.finish_and_clear();
        }
    }
}
