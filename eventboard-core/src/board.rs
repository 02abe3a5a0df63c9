//! Board state for one visit: the loaded store and the page being viewed.

use chrono::{DateTime, Utc};

use crate::countdown::Countdown;
use crate::event::Event;
use crate::pagination::{Page, Paginator};
use crate::source::EventSource;
use crate::store::EventStore;
use crate::view::BoardView;

/// Created by [`Board::load`] and dropped when the visit ends.
#[derive(Debug, Clone)]
pub struct Board {
    store: EventStore,
    paginator: Paginator,
    current_page: usize,
    load_failed: bool,
}

impl Board {
    /// Fetch events once and render the first page.
    ///
    /// A failed fetch shows the error message and leaves the board empty.
    /// There is no retry.
    pub async fn load<S, V>(source: &S, paginator: Paginator, view: &mut V, now: DateTime<Utc>) -> Self
    where
        S: EventSource + ?Sized,
        V: BoardView + ?Sized,
    {
        let board = Self::fetch(source, paginator, view).await;
        if !board.load_failed {
            board.render(view, now);
        }
        board
    }

    /// Fetch events without rendering a page.
    pub async fn fetch<S, V>(source: &S, paginator: Paginator, view: &mut V) -> Self
    where
        S: EventSource + ?Sized,
        V: BoardView + ?Sized,
    {
        view.show_loading();

        let (store, load_failed) = match source.fetch_records().await {
            Ok(records) => (EventStore::from_records(records), false),
            Err(e) => {
                tracing::error!(error = %e, "Database connection failed");
                view.show_load_error();
                (EventStore::default(), true)
            }
        };

        Board {
            store,
            paginator,
            current_page: 1,
            load_failed,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn page(&self, now: DateTime<Utc>) -> Page<'_> {
        self.paginator.page(&self.store, self.current_page, now)
    }

    /// Switch to `page` and re-render. Out-of-range pages render empty.
    pub fn go_to<V>(&mut self, page: usize, view: &mut V, now: DateTime<Utc>)
    where
        V: BoardView + ?Sized,
    {
        self.current_page = page;
        self.render(view, now);
    }

    pub fn next_up(&self, now: DateTime<Utc>) -> Option<&Event> {
        self.store.next_up(now)
    }

    pub fn countdown(&self, now: DateTime<Utc>) -> Option<Countdown> {
        Countdown::for_store(&self.store, now)
    }

    fn render<V>(&self, view: &mut V, now: DateTime<Utc>)
    where
        V: BoardView + ?Sized,
    {
        view.show_page(&self.page(now));
    }
}
