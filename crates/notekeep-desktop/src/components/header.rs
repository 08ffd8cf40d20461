//! Header with search and the new-note button

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let search_term = state.controller.read().search_term().to_string();

    rsx! {
        header {
            class: "header",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                padding: 12px 24px;
                border-bottom: 1px solid #e5e7eb;
            ",

            h1 { class: "logo-text", style: "font-size: 20px; margin: 0;", "My Notes" }

            div {
                class: "header-controls",
                style: "display: flex; gap: 8px;",

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search notes...",
                    value: "{search_term}",
                    oninput: move |evt| {
                        state.controller.write().set_search_term(evt.value());
                    },
                    style: "
                        padding: 8px 12px;
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        outline: none;
                    ",
                }

                button {
                    class: "new-note-btn",
                    onclick: move |_| state.controller.write().open_create(),
                    "New Note"
                }
            }
        }
    }
}
