//! Persisted calendar state.
//!
//! `CalendarStore` holds three independent slices of state (the event list,
//! the view mode, the current date), each backed by its own storage key.
//! Every mutator updates the in-memory slice and immediately writes it back;
//! there is no batching and no transaction across keys.

use chrono::Local;

use crate::error::StoreResult;
use crate::event::{Event, EventId};
use crate::storage::Storage;

pub const EVENTS_KEY: &str = "calendar-events";
pub const VIEW_MODE_KEY: &str = "calendar-view-mode";
pub const CURRENT_DATE_KEY: &str = "calendar-current-date";

const DEFAULT_VIEW_MODE: &str = "month";

/// The calendar state store.
///
/// Constructed once by the composition root and passed by reference to
/// whatever drives it. All mutation goes through the methods below; reads go
/// through the accessors.
pub struct CalendarStore {
    storage: Storage,
    events: Vec<Event>,
    view_mode: String,
    current_date: String,
}

impl CalendarStore {
    /// Initialize the store from `storage`, falling back per slice to an
    /// empty event list, `"month"`, and today's date. A corrupt or missing
    /// key never fails construction.
    pub fn load(storage: Storage) -> CalendarStore {
        let events = storage.load(EVENTS_KEY, Vec::new());
        let view_mode = storage.load(VIEW_MODE_KEY, DEFAULT_VIEW_MODE.to_string());
        let current_date = storage.load(CURRENT_DATE_KEY, today());

        CalendarStore {
            storage,
            events,
            view_mode,
            current_date,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn view_mode(&self) -> &str {
        &self.view_mode
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    /// Append `event` to the end of the list. No validation, no uniqueness
    /// check on the id.
    pub fn add_event(&mut self, event: Event) -> StoreResult<()> {
        self.events.push(event);
        self.persist_events()
    }

    /// Replace the first event whose id matches `updated.id`, preserving its
    /// position. If no event matches, this is a silent no-op (nothing is
    /// written).
    pub fn update_event(&mut self, updated: Event) -> StoreResult<()> {
        if let Some(slot) = self.events.iter_mut().find(|e| e.id == updated.id) {
            *slot = updated;
            return self.persist_events();
        }
        Ok(())
    }

    /// Remove every event whose id matches `event_id` (all matches, unlike
    /// `update_event`). The list is persisted even when nothing matched.
    pub fn delete_event(&mut self, event_id: &EventId) -> StoreResult<()> {
        self.events.retain(|e| &e.id != event_id);
        self.persist_events()
    }

    /// Discard the in-memory event list and re-read it from storage. Used to
    /// pick up writes made by another process sharing the same directory.
    /// Leaves view mode and current date untouched.
    pub fn load_events(&mut self) {
        self.events = self.storage.load(EVENTS_KEY, Vec::new());
    }

    // =========================================================================
    // View state
    // =========================================================================

    pub fn set_view_mode(&mut self, mode: impl Into<String>) -> StoreResult<()> {
        self.view_mode = mode.into();
        self.storage.save(VIEW_MODE_KEY, &self.view_mode)
    }

    pub fn set_current_date(&mut self, date: impl Into<String>) -> StoreResult<()> {
        self.current_date = date.into();
        self.storage.save(CURRENT_DATE_KEY, &self.current_date)
    }

    fn persist_events(&self) -> StoreResult<()> {
        self.storage.save(EVENTS_KEY, &self.events)
    }
}

/// Today's local date as YYYY-MM-DD.
fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
