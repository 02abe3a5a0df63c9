use anyhow::Result;
use dialoguer::Input;
use eventboard_core::form::{FeedbackKind, Proposal, ProposalForm};

use super::Context;
use crate::render::TerminalView;

/// Proposal fields given on the command line.
pub struct Fields {
    pub title: Option<String>,
    pub event_type: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

pub async fn run(ctx: &Context, fields: Fields) -> Result<()> {
    let mut form = ProposalForm::new(ctx.config.feedback_ttl());
    *form.fields_mut() = collect(fields)?;

    let mut view = TerminalView::default();
    let kind = form.submit(&ctx.source, &mut view).await.kind;

    // keep the outcome on screen for feedback_secs
    form.expire_feedback(&mut view).await;

    match kind {
        FeedbackKind::Success => Ok(()),
        FeedbackKind::Error => anyhow::bail!("Proposal was not sent"),
    }
}

/// Fill in whatever wasn't passed as a flag.
fn collect(fields: Fields) -> Result<Proposal> {
    Ok(Proposal {
        title: field_or_prompt(fields.title, "  Event title")?,
        event_type: field_or_prompt(fields.event_type, "  Type (workshop, hackathon, talk...)")?,
        date: field_or_prompt(fields.date, "  Date (YYYY-MM-DD)")?,
        description: field_or_prompt(fields.description, "  Description")?,
    })
}

fn field_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}
