//! Share dialog

use dioxus::prelude::*;

use notekeep_core::share::{SHARE_DISCLAIMER, SHARE_INTRO, SHARE_TITLE};

use super::note_editor::OVERLAY_STYLE;
use crate::state::AppState;

#[component]
pub fn ShareModal() -> Element {
    let mut state = use_context::<AppState>();
    let Some(presenter) = state
        .controller
        .read()
        .share_presenter(&*state.platform.read())
    else {
        return rsx! {};
    };

    let url = presenter.url.clone();
    let note_id = presenter.note_id;

    let copy_link = move |_| {
        let platform = state.platform.read().clone();
        state.controller.write().copy_share_link(&platform, &note_id);
    };

    rsx! {
        div {
            class: "modal-overlay",
            style: OVERLAY_STYLE,

            div {
                class: "modal",
                style: "
                    width: 400px;
                    padding: 24px;
                    border-radius: 16px;
                    background: white;
                ",

                div {
                    class: "modal-header",
                    style: "display: flex; justify-content: space-between;",
                    h2 { class: "modal-title", style: "margin: 0;", "{SHARE_TITLE}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| state.controller.write().close_share(),
                        "×"
                    }
                }

                p { style: "color: #6b7280;", "{SHARE_INTRO}" }

                div {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        padding: 12px;
                        border-radius: 12px;
                        background: #f9fafb;
                    ",
                    input {
                        r#type: "text",
                        readonly: true,
                        value: "{url}",
                        style: "flex: 1; border: none; outline: none; background: transparent;",
                    }
                    button { class: "copy-btn", onclick: copy_link, "Copy" }
                }

                p { style: "font-size: 12px; color: #9ca3af;", "{SHARE_DISCLAIMER}" }
            }
        }
    }
}
