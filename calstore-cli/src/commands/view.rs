use anyhow::{Context, Result};
use calstore_core::CalendarStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut CalendarStore, mode: Option<String>) -> Result<()> {
    match mode {
        Some(mode) => {
            store
                .set_view_mode(mode.clone())
                .context("Failed to save view mode")?;
            println!("{}", format!("  View mode: {}", mode).green());
        }
        None => println!("  {}", store.view_mode()),
    }
    Ok(())
}
