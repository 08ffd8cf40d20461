//! Note grid with loading and empty states

use dioxus::prelude::*;

use notekeep_core::controller::{EMPTY_SUBTITLE, EMPTY_TITLE};

use super::note_actions::delete_note;
use super::NoteCard;
use crate::state::AppState;

#[component]
pub fn NoteGrid() -> Element {
    let mut state = use_context::<AppState>();
    let (loading, cards, show_empty) = {
        let controller = state.controller.read();
        (
            controller.is_loading(),
            controller.note_cards(),
            controller.show_empty_state(),
        )
    };

    rsx! {
        main {
            class: "main-content",
            style: "flex: 1; padding: 24px;",

            if loading {
                div { class: "loading-spinner", style: "text-align: center; color: #6b7280;", "Loading..." }
            } else {
                div {
                    class: "notes-grid",
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 16px;
                    ",
                    for card in cards {
                        {
                            let key = card.id.to_string();
                            let edit_id = card.id.clone();
                            let share_id = card.id.clone();
                            let delete_id = card.id.clone();

                            rsx! {
                                NoteCard {
                                    key: "{key}",
                                    card,
                                    on_edit: move |()| {
                                        state.controller.write().open_edit(&edit_id);
                                    },
                                    on_share: move |()| {
                                        state.controller.write().open_share(&share_id);
                                    },
                                    on_delete: move |()| delete_note(state.controller, delete_id.clone()),
                                }
                            }
                        }
                    }
                }
            }

            if show_empty {
                div {
                    class: "empty-state",
                    style: "text-align: center; padding: 48px 0; color: #6b7280;",
                    h3 { class: "empty-title", "{EMPTY_TITLE}" }
                    p { class: "empty-subtitle", "{EMPTY_SUBTITLE}" }
                    button {
                        class: "new-note-btn",
                        onclick: move |_| state.controller.write().open_create(),
                        "Create Note"
                    }
                }
            }
        }
    }
}
