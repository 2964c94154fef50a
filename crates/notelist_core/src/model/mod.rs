//! Payload types carried by the shared note list.
//!
//! The list itself is generic; this module only supplies the default record.

pub mod note;
