use anyhow::{Context, Result};
use calstore_core::CalendarStore;
use owo_colors::OwoColorize;

use super::parse_event_id;

pub fn run(store: &mut CalendarStore, id: &str) -> Result<()> {
    let id = parse_event_id(id);

    let before = store.events().len();
    store.delete_event(&id).context("Failed to save events")?;
    let removed = before - store.events().len();

    if removed == 0 {
        println!("{}", format!("  No event with id {}", id).dimmed());
    } else {
        let label = if removed == 1 { "event" } else { "events" };
        println!("{}", format!("  Deleted {} {}", removed, label).red());
    }
    Ok(())
}
