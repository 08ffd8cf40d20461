//! Notification toast

use dioxus::prelude::*;

use notekeep_core::notification::NotificationKind;

use crate::state::AppState;

#[component]
pub fn NotificationToast() -> Element {
    let state = use_context::<AppState>();
    let Some((message, kind)) = state
        .controller
        .read()
        .notification()
        .map(|n| (n.message.clone(), n.kind))
    else {
        return rsx! {};
    };

    let background = match kind {
        NotificationKind::Success => "#10b981",
        NotificationKind::Error => "#ef4444",
    };

    let kind_class = kind.as_str();

    rsx! {
        div {
            class: "notification {kind_class}",
            style: "
                position: fixed;
                right: 24px;
                bottom: 24px;
                padding: 12px 16px;
                border-radius: 12px;
                color: white;
                background: {background};
            ",
            span { "{message}" }
        }
    }
}
