//! Note editor state.
//!
//! The editor is created fresh every time it opens and dropped when it
//! closes, so a draft never leaks from one opening into the next.

use crate::models::{Note, NoteDraft};

pub const TITLE_PLACEHOLDER: &str = "Note title...";
pub const CONTENT_PLACEHOLDER: &str = "Write your note here...";
pub const PUBLIC_LABEL: &str = "Make this note public";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorMode {
    Create,
    Edit,
}

/// Draft fields for the create/edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditor {
    mode: EditorMode,
    pub title: String,
    pub content: String,
    pub is_public: bool,
}

impl NoteEditor {
    /// Edit mode pre-filled from `note`, or a blank create form.
    pub fn open(note: Option<&Note>) -> Self {
        note.map_or_else(Self::create, Self::edit)
    }

    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            content: String::new(),
            is_public: false,
        }
    }

    pub fn edit(note: &Note) -> Self {
        Self {
            mode: EditorMode::Edit,
            title: note.title.clone(),
            content: note.content.clone(),
            is_public: note.is_public,
        }
    }

    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit)
    }

    pub const fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Note"
        } else {
            "Create Note"
        }
    }

    pub const fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Create"
        }
    }

    /// Save is allowed only with a non-blank title
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// The draft to send, or `None` while saving is disabled
    pub fn submit(&self) -> Option<NoteDraft> {
        self.can_save().then(|| NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            is_public: self.is_public,
        })
    }
}
