use anyhow::{Context, Result};
use calstore_core::CalendarStore;
use owo_colors::OwoColorize;

use super::{build_event, parse_event_id};
use crate::render::Render;

pub fn run(
    store: &mut CalendarStore,
    id: &str,
    title: Option<String>,
    time: Option<String>,
    fields: Vec<String>,
) -> Result<()> {
    let id = parse_event_id(id);

    // The store no-ops silently on an unknown id, so check presence here to
    // be able to tell the user what happened.
    if !store.events().iter().any(|e| e.id == id) {
        println!("{}", format!("  No event with id {} (nothing updated)", id).dimmed());
        return Ok(());
    }

    let event = build_event(id, title, time, fields)?;
    let line = event.render();

    store.update_event(event).context("Failed to save events")?;

    println!("{} {}", "  Updated:".yellow(), line);
    Ok(())
}
