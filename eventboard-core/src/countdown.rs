//! Countdown to the next upcoming event.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::event::EventKey;
use crate::store::EventStore;
use crate::view::BoardView;

/// How often the countdown display is refreshed.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: i64 = 60 * 60;

/// Time left until the target, broken into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// `None` once the target has been reached.
    pub fn from_delta(delta: TimeDelta) -> Option<Self> {
        if delta <= TimeDelta::zero() {
            return None;
        }
        // Partial seconds are dropped, so the last half second reads 00.
        let total = delta.num_seconds();
        Some(Remaining {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / 60,
            seconds: total % 60,
        })
    }

    /// Fields as shown in the days/hours/minutes/seconds slots.
    pub fn padded(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|v| format!("{v:02}"))
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [days, hours, minutes, seconds] = self.padded();
        write!(f, "{days}d {hours}h {minutes}m {seconds}s")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Remaining(Remaining),
    Started,
}

/// Countdown targeting one event.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: EventKey,
}

impl Countdown {
    pub fn new(target: EventKey) -> Self {
        Countdown { target }
    }

    /// Countdown to the store's next-up event, if there is one.
    pub fn for_store(store: &EventStore, now: DateTime<Utc>) -> Option<Self> {
        store.next_up(now).map(|event| Countdown::new(event.key()))
    }

    pub fn title(&self) -> &str {
        &self.target.title
    }

    pub fn target(&self) -> &EventKey {
        &self.target
    }

    pub fn tick(&self, now: DateTime<Utc>) -> Tick {
        match Remaining::from_delta(self.target.date - now) {
            Some(remaining) => Tick::Remaining(remaining),
            None => Tick::Started,
        }
    }

    /// Reveal the countdown and tick once per second until the event starts.
    ///
    /// The first tick is immediate. Cancel by dropping the future.
    pub async fn run<V, F>(&self, view: &mut V, now: F)
    where
        V: BoardView + ?Sized,
        F: Fn() -> DateTime<Utc>,
    {
        view.reveal_countdown(self.title());

        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            match self.tick(now()) {
                Tick::Remaining(remaining) => view.show_countdown(&remaining),
                Tick::Started => {
                    tracing::debug!(title = %self.target.title, "Countdown reached its target");
                    view.show_started();
                    break;
                }
            }
        }
    }
}
