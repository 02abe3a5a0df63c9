//! Transient terminal lines drawn with indicatif.

use std::borrow::Cow;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_RATE: Duration = Duration::from_millis(80);

/// `message` followed by a spinner, redrawn until cleared.
pub fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(style("{msg} {spinner}"));
    bar.set_message(message);
    bar.enable_steady_tick(TICK_RATE);
    bar
}

/// A single still line that stays until `finish_and_clear` removes it.
pub fn status_line(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(style("{msg}"));
    bar.set_message(message);
    bar.tick();
    bar
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_holds_its_message() {
        let line = status_line("Proposal submitted!");
        assert_eq!(line.message(), "Proposal submitted!");
        line.finish_and_clear();
    }

    #[test]
    fn spinner_holds_its_message() {
        let bar = spinner(String::from("Submitting..."));
        assert_eq!(bar.message(), "Submitting...");
        bar.finish_and_clear();
    }
}
