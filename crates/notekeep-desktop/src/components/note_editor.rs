//! Create/edit note dialog

use dioxus::prelude::*;

use notekeep_core::editor::{
    NoteEditor, CANCEL_LABEL, CONTENT_PLACEHOLDER, PUBLIC_LABEL, TITLE_PLACEHOLDER,
};

use super::note_actions::save_note;
use crate::state::AppState;

pub(super) const OVERLAY_STYLE: &str = "
    position: fixed;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.4);
";

/// Modal editor. The draft lives only as long as this component is mounted.
#[component]
pub fn NoteEditorModal() -> Element {
    let mut state = use_context::<AppState>();
    let mut editor = use_signal(|| NoteEditor::open(state.controller.peek().editing_note()));

    let (heading, submit_label, title, content, is_public, can_save) = {
        let current = editor.read();
        (
            current.heading(),
            current.submit_label(),
            current.title.clone(),
            current.content.clone(),
            current.is_public,
            current.can_save(),
        )
    };

    let submit = move |_| {
        let draft = editor.read().submit();
        if let Some(draft) = draft {
            save_note(state.controller, draft);
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            style: OVERLAY_STYLE,

            div {
                class: "modal",
                style: "
                    width: 480px;
                    padding: 24px;
                    border-radius: 16px;
                    background: white;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                ",

                div {
                    class: "modal-header",
                    style: "display: flex; justify-content: space-between;",
                    h2 { class: "modal-title", style: "margin: 0;", "{heading}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| state.controller.write().close_editor(),
                        "×"
                    }
                }

                input {
                    class: "modal-input",
                    r#type: "text",
                    placeholder: TITLE_PLACEHOLDER,
                    value: "{title}",
                    autofocus: true,
                    oninput: move |evt| editor.write().title = evt.value(),
                }

                textarea {
                    class: "modal-textarea",
                    style: "min-height: 160px; resize: vertical;",
                    placeholder: CONTENT_PLACEHOLDER,
                    value: "{content}",
                    oninput: move |evt| editor.write().content = evt.value(),
                }

                label {
                    class: "checkbox-container",
                    style: "display: flex; align-items: center; gap: 8px;",
                    input {
                        class: "checkbox",
                        r#type: "checkbox",
                        checked: is_public,
                        onchange: move |evt| editor.write().is_public = evt.checked(),
                    }
                    "{PUBLIC_LABEL}"
                }

                div {
                    class: "modal-footer",
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| state.controller.write().close_editor(),
                        "{CANCEL_LABEL}"
                    }
                    button {
                        class: "btn-primary",
                        disabled: !can_save,
                        onclick: submit,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
