use anyhow::Result;
use chrono::Utc;
use dialoguer::Select;

use super::Context;
use crate::render::TerminalView;

pub async fn run(ctx: &Context) -> Result<()> {
    let mut view = TerminalView::default();
    let mut board = ctx.load_board(&mut view).await?;

    if board.load_failed() {
        return Ok(());
    }

    loop {
        let controls = board.page(Utc::now()).controls;
        if !controls.is_visible() {
            return Ok(());
        }

        let mut choices: Vec<(&str, Option<usize>)> = Vec::new();
        if let Some(page) = controls.prev_page() {
            choices.push(("‹ Prev", Some(page)));
        }
        if let Some(page) = controls.next_page() {
            choices.push(("Next ›", Some(page)));
        }
        choices.push(("Quit", None));

        let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();

        println!();
        let selection = Select::new()
            .with_prompt(controls.label())
            .items(&labels)
            .default(0)
            .interact()?;

        match choices[selection].1 {
            Some(page) => {
                println!();
                board.go_to(page, &mut view, Utc::now());
            }
            None => return Ok(()),
        }
    }
}
