//! UI Components
//!
//! Reusable UI components for the desktop application.

mod header;
mod note_actions;
mod note_card;
mod note_editor;
mod note_grid;
mod notification;
mod share_modal;

pub use header::Header;
pub use note_actions::load_notes;
pub use note_card::NoteCard;
pub use note_editor::NoteEditorModal;
pub use note_grid::NoteGrid;
pub use notification::NotificationToast;
pub use share_modal::ShareModal;
