use anyhow::Result;
use chrono::Utc;
use eventboard_core::pagination::EventCard;
use owo_colors::OwoColorize;

use super::Context;
use crate::render::{Render, TerminalView};

pub async fn run(ctx: &Context) -> Result<()> {
    let mut view = TerminalView::default();
    let board = ctx.fetch_board(&mut view).await?;

    if board.load_failed() {
        return Ok(());
    }

    match board.next_up(Utc::now()) {
        Some(event) => {
            let card = EventCard {
                event,
                is_next_up: true,
            };
            println!("{}", card.render());
        }
        None => println!("{}", "No upcoming events".dimmed()),
    }

    Ok(())
}
