//! Home view - main application screen

use dioxus::prelude::*;

use notekeep_core::Modal;

use crate::components::{Header, NoteEditorModal, NoteGrid, NotificationToast, ShareModal};
use crate::state::AppState;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let modal = state.controller.read().modal().clone();
    let editor_open = matches!(modal, Modal::Creating | Modal::Editing(_));
    let sharing = matches!(modal, Modal::Sharing(_));
    // Remount the editor whenever its target changes so the draft starts fresh
    let editor_key = match &modal {
        Modal::Editing(note) => format!("edit-{}", note.id),
        _ => "create".to_string(),
    };

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; min-height: 100vh;",

            Header {}
            NoteGrid {}

            if editor_open {
                NoteEditorModal { key: "{editor_key}" }
            }

            if sharing {
                ShareModal {}
            }

            NotificationToast {}
        }
    }
}
