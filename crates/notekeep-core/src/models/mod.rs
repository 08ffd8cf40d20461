//! Data models for Notekeep

mod note;

pub use note::{parse_timestamp, Note, NoteDraft, NoteId};
