use anyhow::{Context, Result};
use calstore_core::CalendarStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut CalendarStore, date: Option<String>) -> Result<()> {
    match date {
        Some(date) => {
            store
                .set_current_date(date.clone())
                .context("Failed to save current date")?;
            println!("{}", format!("  Current date: {}", date).green());
        }
        None => println!("  {}", store.current_date()),
    }
    Ok(())
}
