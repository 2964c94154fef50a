//! Shared note list state.
//!
//! # Responsibility
//! - Provide the generic observable container.
//! - Own the process-wide note list instance.
//!
//! # Invariants
//! - The notes singleton is created on first access and starts empty.
//! - It is never torn down explicitly; it lives until process exit.
//! - Consumers receive handles (`NoteList::clone`) instead of reaching for the
//!   global, so tests can substitute a fresh list.

pub mod observable;

use crate::model::note::Note;
use log::info;
use observable::ObservableList;
use once_cell::sync::Lazy;

/// Observable list of notes.
pub type NoteList = ObservableList<Note>;

static NOTES_STORE: Lazy<NoteList> = Lazy::new(|| {
    info!("event=store_init module=store status=ok items=0");
    NoteList::new()
});

/// Returns the process-wide note list.
pub fn notes_store() -> &'static NoteList {
    &NOTES_STORE
}
