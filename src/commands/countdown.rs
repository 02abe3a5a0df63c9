use anyhow::Result;
use chrono::Utc;
use eventboard_core::countdown::Tick;
use eventboard_core::view::BoardView;
use owo_colors::OwoColorize;

use super::Context;
use crate::render::TerminalView;

pub async fn run(ctx: &Context, once: bool) -> Result<()> {
    let mut view = TerminalView::default();
    let board = ctx.fetch_board(&mut view).await?;

    if board.load_failed() {
        return Ok(());
    }

    let Some(countdown) = board.countdown(Utc::now()) else {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    };

    if once {
        view.reveal_countdown(countdown.title());
        match countdown.tick(Utc::now()) {
            Tick::Remaining(remaining) => view.show_countdown(&remaining),
            Tick::Started => view.show_started(),
        }
        view.finish_line();
        return Ok(());
    }

    tokio::select! {
        _ = countdown.run(&mut view, Utc::now) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::debug!("Countdown interrupted");
        }
    }
    view.finish_line();

    Ok(())
}
