use anyhow::Result;
use calstore_core::{CalendarStore, sorted_events};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &CalendarStore, sort: bool) -> Result<()> {
    if store.events().is_empty() {
        println!("{}", "  No events".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("  {} · {}", store.current_date(), store.view_mode()).dimmed()
    );

    if sort {
        for event in sorted_events(store.events()) {
            println!("  {}", event.render());
        }
    } else {
        for event in store.events() {
            println!("  {}", event.render());
        }
    }

    Ok(())
}
