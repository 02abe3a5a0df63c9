//! Core of the events board.
//!
//! - `store` and `pagination` turn the spreadsheet rows into pages of
//!   approved events
//! - `countdown` ticks toward the next upcoming event
//! - `form` handles event proposals
//! - `source` / `sheet` talk to the spreadsheet endpoint
//! - `view` is the display surface a front end implements

pub mod board;
pub mod config;
pub mod countdown;
pub mod error;
pub mod event;
pub mod form;
pub mod pagination;
pub mod sheet;
pub mod source;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

pub use event::{Event, EventKey, EventStatus};
