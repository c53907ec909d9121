//! Core types for the calstore ecosystem.
//!
//! This crate provides the persisted calendar state and the operations over it:
//! - `Event` and `EventId` for calendar events
//! - `Storage` for the key-value persistence layer
//! - `CalendarStore` holding events, view mode and current date
//! - `sorted_events` for time-ordered views

pub mod error;
pub mod event;
pub mod sort;
pub mod storage;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use event::{Event, EventId};
pub use sort::sorted_events;
pub use storage::Storage;
pub use store::CalendarStore;
