//! Fixed-size pagination over the event store.

use chrono::{DateTime, Utc};

use crate::error::{BoardError, BoardResult};
use crate::event::{Event, EventKey};
use crate::store::EventStore;

/// Number of event cards shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Paginator {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> BoardResult<Self> {
        if page_size == 0 {
            return Err(BoardError::Config("page_size must be at least 1".into()));
        }
        Ok(Paginator { page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Index of the first event on the 1-based `page`.
    fn page_start(&self, page: usize) -> Option<usize> {
        page.checked_sub(1)
            .and_then(|p| p.checked_mul(self.page_size))
    }

    /// Events on the 1-based `page`. Pages outside the range are empty.
    pub fn slice<'a>(&self, events: &'a [Event], page: usize) -> &'a [Event] {
        let Some(start) = self.page_start(page) else {
            return &[];
        };
        if start >= events.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(events.len());
        &events[start..end]
    }

    pub fn controls(&self, page: usize, count: usize) -> PageControls {
        PageControls {
            page,
            total_pages: self.total_pages(count),
        }
    }

    /// Resolve everything needed to display `page` of the store.
    pub fn page<'a>(&self, store: &'a EventStore, page: usize, now: DateTime<Utc>) -> Page<'a> {
        let events = self.slice(store.events(), page);
        let next_up_index = store.next_up_index(now);
        let next_up_offset = next_up_index
            .zip(self.page_start(page))
            .and_then(|(index, start)| index.checked_sub(start))
            .filter(|&offset| offset < events.len());

        Page {
            number: page,
            events,
            next_up: next_up_index.map(|i| store.events()[i].key()),
            next_up_offset,
            controls: self.controls(page, store.len()),
        }
    }
}

/// Prev/next navigation state for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page: usize,
    pub total_pages: usize,
}

impl PageControls {
    /// Navigation is hidden entirely when everything fits on one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_page(&self) -> Option<usize> {
        self.prev_enabled().then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.next_enabled().then(|| self.page + 1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// One rendered page of events.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub number: usize,
    pub events: &'a [Event],
    /// Key of the board-wide next-up event, which may live on another page
    pub next_up: Option<EventKey>,
    /// Position of the next-up event within `events`, when it is on this page
    pub next_up_offset: Option<usize>,
    pub controls: PageControls,
}

/// An event as it appears on a page.
#[derive(Debug, Clone, Copy)]
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub is_next_up: bool,
}

impl<'a> Page<'a> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn cards(&self) -> Vec<EventCard<'a>> {
        self.events
            .iter()
            .enumerate()
            .map(|(offset, event)| EventCard {
                event,
                is_next_up: self.next_up_offset == Some(offset),
            })
            .collect()
    }
}
