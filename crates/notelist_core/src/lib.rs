//! Shared, observable note list state for the notelist application.
//!
//! Collaborators (views, persistence adapters) read and replace the list
//! through [`NoteList`] handles; this crate performs no note CRUD itself.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use store::observable::{ObservableList, ObserverId, Unsubscribe};
pub use store::{notes_store, NoteList};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
