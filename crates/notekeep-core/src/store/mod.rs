//! Note store access.
//!
//! The note store is an external REST service that owns every note. The
//! controller only talks to it through [`NoteStore`], so tests can swap in
//! an in-memory fake.

mod http;

pub use http::HttpNoteStore;

use crate::error::Result;
use crate::models::{Note, NoteDraft, NoteId};

/// CRUD operations against the note store
#[allow(async_fn_in_trait)]
pub trait NoteStore {
    /// `GET /notes`
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// `POST /notes`
    async fn create_note(&self, draft: &NoteDraft) -> Result<()>;

    /// `PUT /notes/{id}`
    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<()>;

    /// `DELETE /notes/{id}`
    async fn delete_note(&self, id: &NoteId) -> Result<()>;
}

/// Create or update depending on whether an edit target is set.
async fn persist_draft<S: NoteStore>(
    store: &S,
    target: Option<&NoteId>,
    draft: &NoteDraft,
) -> Result<()> {
    match target {
        Some(id) => store.update_note(id, draft).await,
        None => store.create_note(draft).await,
    }
}

/// Result of a save followed by the reload that resynchronizes the cache
#[derive(Debug)]
pub struct SaveOutcome {
    pub saved: Result<()>,
    /// `None` when the save failed and no reload was attempted
    pub reloaded: Option<Result<Vec<Note>>>,
}

/// Persist `draft`, then re-fetch every note if the store accepted it.
pub async fn save_and_reload<S: NoteStore>(
    store: &S,
    target: Option<&NoteId>,
    draft: &NoteDraft,
) -> SaveOutcome {
    let saved = persist_draft(store, target, draft).await;
    let reloaded = if saved.is_ok() {
        Some(store.list_notes().await)
    } else {
        None
    };
    SaveOutcome { saved, reloaded }
}
