use anyhow::{Context, Result};
use calstore_core::CalendarStore;
use owo_colors::OwoColorize;

use super::{build_event, parse_event_id};
use crate::render::Render;

pub fn run(
    store: &mut CalendarStore,
    title: Option<String>,
    id: Option<String>,
    time: Option<String>,
    fields: Vec<String>,
) -> Result<()> {
    let id = match id {
        Some(id) => parse_event_id(&id),
        None => format!("local-{}", uuid::Uuid::new_v4()).into(),
    };

    let event = build_event(id, title, time, fields)?;
    let line = event.render();

    store.add_event(event).context("Failed to save events")?;

    println!("{} {}", "  Added:".green(), line);
    Ok(())
}
