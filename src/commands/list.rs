use anyhow::Result;
use chrono::Utc;

use super::Context;
use crate::render::TerminalView;

pub async fn run(ctx: &Context, page: usize) -> Result<()> {
    let mut view = TerminalView::default();
    let mut board = ctx.fetch_board(&mut view).await?;

    if !board.load_failed() {
        board.go_to(page, &mut view, Utc::now());
    }

    Ok(())
}
