//! Note payload record.
//!
//! # Responsibility
//! - Give the process-wide note list a concrete element type.
//!
//! # Invariants
//! - `id` is stable for the lifetime of the note and never reused.
//! - The list container never inspects note fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// Default payload held by the shared note list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID used by collaborators to address this note.
    pub id: NoteId,
    /// Free-form body text.
    pub content: String,
}

impl Note {
    /// Creates a note with a freshly generated v4 ID.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), content)
    }

    /// Creates a note with a caller-provided ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
