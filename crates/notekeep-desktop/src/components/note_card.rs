//! Note card component

use dioxus::prelude::*;

use notekeep_core::card::{CardAction, NoteCardView, PUBLIC_BADGE};

const fn action_label(action: CardAction) -> &'static str {
    match action {
        CardAction::Share => "Share",
        CardAction::Edit => "Edit",
        CardAction::Delete => "Delete",
    }
}

/// A single note rendered in the grid.
///
/// Action clicks never bubble to the card itself.
#[component]
pub fn NoteCard(
    card: NoteCardView,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
    on_share: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "note-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
            ",

            div {
                class: "note-header",
                style: "display: flex; justify-content: space-between; gap: 8px;",

                h3 { class: "note-title", style: "margin: 0;", "{card.title}" }

                div {
                    class: "note-actions",
                    style: "display: flex; gap: 4px;",
                    for action in card.actions.iter().copied() {
                        button {
                            class: "note-action-btn",
                            title: action_label(action),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                match action {
                                    CardAction::Share => on_share.call(()),
                                    CardAction::Edit => on_edit.call(()),
                                    CardAction::Delete => on_delete.call(()),
                                }
                            },
                            {action_label(action)}
                        }
                    }
                }
            }

            p {
                class: "note-content",
                style: "margin: 0; white-space: pre-wrap;",
                "{card.content}"
            }

            div {
                class: "note-footer",
                style: "display: flex; justify-content: space-between; font-size: 12px; color: #6b7280;",
                span { "{card.date_label}" }
                if card.show_public_badge {
                    span { class: "public-badge", "{PUBLIC_BADGE}" }
                }
            }
        }
    }
}
