//! Terminal rendering for calstore types.
//!
//! Extension trait adding colored one-line rendering to core types using
//! owo_colors.

use calstore_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = match self.time.as_deref() {
            Some(t) => t.cyan().to_string(),
            None => "--:--".dimmed().to_string(),
        };

        let title = self
            .extra
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("(untitled)");

        format!("{} {} {}", time, title, format!("[{}]", self.id).dimmed())
    }
}
