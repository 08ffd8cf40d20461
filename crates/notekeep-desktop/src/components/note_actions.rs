//! Shared note actions used by UI components.
//!
//! Each action copies what it needs out of the controller, awaits the note
//! store without holding a borrow, then applies the outcome. Reads use
//! `peek` so calling an action from an effect does not subscribe to it.

use dioxus::prelude::*;

use notekeep_core::store::save_and_reload;
use notekeep_core::{NoteDraft, NoteId, NoteStore};

use crate::state::Controller;

/// Re-fetch every note from the store.
pub fn load_notes(mut controller: Signal<Controller>) {
    let store = controller.peek().store().clone();
    controller.write().begin_load();
    spawn(async move {
        let result = store.list_notes().await;
        controller.write().apply_loaded(result);
    });
}

/// Create a note, or update the one being edited, then reload the list.
pub fn save_note(mut controller: Signal<Controller>, draft: NoteDraft) {
    let (store, target) = {
        let current = controller.peek();
        (current.store().clone(), current.edit_target())
    };
    spawn(async move {
        let outcome = save_and_reload(&store, target.as_ref(), &draft).await;
        controller.write().apply_save_outcome(target.as_ref(), outcome);
    });
}

/// Delete a note and drop it from the local list once the store confirms.
pub fn delete_note(mut controller: Signal<Controller>, id: NoteId) {
    let store = controller.peek().store().clone();
    spawn(async move {
        let result = store.delete_note(&id).await;
        controller.write().apply_deleted(&id, result);
    });
}
