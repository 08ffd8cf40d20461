//! Application controller.
//!
//! Owns the cached note list, the search term and which dialog is open, and
//! is the only component that talks to the note store. The store is the
//! source of truth: creates and updates are followed by a full reload, and
//! a delete removes the note locally once the store confirms it.
//!
//! Each async operation is also split into explicit transitions
//! (`begin_load`/`apply_loaded`, `edit_target`/`apply_save_outcome`,
//! `apply_deleted`) so a UI shell can await the store without holding a
//! borrow of the controller.


use crate::card::NoteCardView;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{Note, NoteDraft, NoteId};
use crate::notification::{Notification, NotificationCenter, NotificationKind};
use crate::platform::Platform;
use crate::search::filter_notes;
use crate::share::{build_share_link, SharePresenter};
use crate::store::{save_and_reload, NoteStore, SaveOutcome};

pub const MSG_LOAD_FAILED: &str = "Failed to load notes";
pub const MSG_SAVE_FAILED: &str = "Failed to save note";
pub const MSG_DELETE_FAILED: &str = "Failed to delete note";
pub const MSG_COPY_FAILED: &str = "Failed to copy share link";
pub const MSG_CREATED: &str = "Note created!";
pub const MSG_UPDATED: &str = "Note updated!";
pub const MSG_DELETED: &str = "Note deleted!";
pub const MSG_LINK_COPIED: &str = "Share link copied!";

pub const EMPTY_TITLE: &str = "No notes yet!";
pub const EMPTY_SUBTITLE: &str = "Create your first note to get started";

/// Which dialog is open. Opening one replaces any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Creating,
    Editing(Note),
    Sharing(Note),
}

pub struct AppController<S> {
    store: S,
    date_format: String,
    notes: Vec<Note>,
    search_term: String,
    modal: Modal,
    loading: bool,
    notifications: NotificationCenter,
}

impl<S: NoteStore> AppController<S> {
    /// A controller with an empty cache, marked as loading until the first
    /// load completes.
    pub fn new(store: S, config: &ClientConfig) -> Self {
        Self {
            store,
            date_format: config.date_format.clone(),
            notes: Vec::new(),
            search_term: String::new(),
            modal: Modal::None,
            loading: true,
            notifications: NotificationCenter::new(),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    // ---------------------------------------------------------------------
    // Derived view
    // ---------------------------------------------------------------------

    /// Cached notes whose title or content contains the search term
    pub fn filtered_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.search_term)
    }

    /// Card view models for [`Self::filtered_notes`]
    pub fn note_cards(&self) -> Vec<NoteCardView> {
        self.filtered_notes()
            .into_iter()
            .map(|note| NoteCardView::new(note, &self.date_format))
            .collect()
    }

    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.filtered_notes().is_empty()
    }

    pub fn find_note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    // ---------------------------------------------------------------------
    // Dialogs
    // ---------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.modal = Modal::Creating;
    }

    /// Open the editor for a cached note. Returns false if it is unknown.
    pub fn open_edit(&mut self, id: &NoteId) -> bool {
        match self.find_note(id).cloned() {
            Some(note) => {
                self.modal = Modal::Editing(note);
                true
            }
            None => false,
        }
    }

    /// Open the share dialog for a cached note. Returns false if it is unknown.
    pub fn open_share(&mut self, id: &NoteId) -> bool {
        match self.find_note(id).cloned() {
            Some(note) => {
                self.modal = Modal::Sharing(note);
                true
            }
            None => false,
        }
    }

    pub const fn is_editor_open(&self) -> bool {
        matches!(self.modal, Modal::Creating | Modal::Editing(_))
    }

    /// The note being edited; `None` in create mode or with no editor open
    pub const fn editing_note(&self) -> Option<&Note> {
        match &self.modal {
            Modal::Editing(note) => Some(note),
            _ => None,
        }
    }

    /// Id a save would update; `None` means a save creates a note
    pub fn edit_target(&self) -> Option<NoteId> {
        self.editing_note().map(|note| note.id.clone())
    }

    pub fn close_editor(&mut self) {
        if self.is_editor_open() {
            self.modal = Modal::None;
        }
    }

    pub fn close_share(&mut self) {
        if matches!(self.modal, Modal::Sharing(_)) {
            self.modal = Modal::None;
        }
    }

    // ---------------------------------------------------------------------
    // Notifications
    // ---------------------------------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.notifications.show(message, kind)
    }

    pub fn dismiss_notification(&mut self, ticket: u64) -> bool {
        self.notifications.dismiss(ticket)
    }

    /// Notification visible right now
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.visible()
    }

    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the cache on success; keep it and report on failure.
    pub fn apply_loaded(&mut self, result: Result<Vec<Note>>) {
        match result {
            Ok(notes) => {
                tracing::info!("Loaded {} notes", notes.len());
                self.notes = notes;
            }
            Err(e) => {
                tracing::error!("Failed to load notes: {}", e);
                self.notify(MSG_LOAD_FAILED, NotificationKind::Error);
            }
        }
        self.loading = false;
    }

    /// Fetch every note from the store
    pub async fn load_notes(&mut self) {
        self.begin_load();
        let result = self.store.list_notes().await;
        self.apply_loaded(result);
    }

    // ---------------------------------------------------------------------
    // Saving
    // ---------------------------------------------------------------------

    /// Finish a save sent for `target`: apply the reload (if any), then
    /// close the editor and report.
    ///
    /// The reload does not raise the loading flag; the grid keeps showing
    /// the current notes while it is in flight.
    pub fn apply_save_outcome(&mut self, target: Option<&NoteId>, outcome: SaveOutcome) {
        if let Some(reloaded) = outcome.reloaded {
            self.apply_loaded(reloaded);
        }
        match outcome.saved {
            Ok(()) => {
                self.close_editor();
                let message = match target {
                    Some(id) => {
                        tracing::info!("Updated note {}", id);
                        MSG_UPDATED
                    }
                    None => {
                        tracing::info!("Created note");
                        MSG_CREATED
                    }
                };
                self.notify(message, NotificationKind::Success);
            }
            Err(e) => {
                tracing::error!("Failed to save note: {}", e);
                self.notify(MSG_SAVE_FAILED, NotificationKind::Error);
            }
        }
    }

    /// Create a note, or update the one being edited, then reload
    pub async fn save_note(&mut self, draft: NoteDraft) {
        let target = self.edit_target();
        let outcome = save_and_reload(&self.store, target.as_ref(), &draft).await;
        self.apply_save_outcome(target.as_ref(), outcome);
    }

    // ---------------------------------------------------------------------
    // Deleting
    // ---------------------------------------------------------------------

    /// Drop the note locally once the store confirmed the delete
    pub fn apply_deleted(&mut self, id: &NoteId, result: Result<()>) {
        match result {
            Ok(()) => {
                tracing::info!("Deleted note {}", id);
                self.notes.retain(|note| &note.id != id);
                self.notify(MSG_DELETED, NotificationKind::Success);
            }
            Err(e) => {
                tracing::error!("Failed to delete note {}: {}", id, e);
                self.notify(MSG_DELETE_FAILED, NotificationKind::Error);
            }
        }
    }

    pub async fn delete_note(&mut self, id: &NoteId) {
        let result = self.store.delete_note(id).await;
        self.apply_deleted(id, result);
    }

    // ---------------------------------------------------------------------
    // Sharing
    // ---------------------------------------------------------------------

    pub fn build_share_link<P: Platform + ?Sized>(&self, platform: &P, id: &NoteId) -> String {
        build_share_link(&platform.current_origin(), id)
    }

    /// Presenter for the open share dialog
    pub fn share_presenter<P: Platform + ?Sized>(&self, platform: &P) -> Option<SharePresenter> {
        match &self.modal {
            Modal::Sharing(note) => Some(SharePresenter::new(note, &platform.current_origin())),
            _ => None,
        }
    }

    /// Put the share link for `id` on the clipboard and report the outcome
    pub fn copy_share_link<P: Platform + ?Sized>(&mut self, platform: &P, id: &NoteId) {
        let link = self.build_share_link(platform, id);
        match platform.copy_to_clipboard(&link) {
            Ok(()) => {
                tracing::debug!("Copied share link {}", link);
                self.notify(MSG_LINK_COPIED, NotificationKind::Success);
            }
            Err(e) => {
                tracing::error!("Failed to copy share link: {}", e);
                self.notify(MSG_COPY_FAILED, NotificationKind::Error);
            }
        }
    }
}
