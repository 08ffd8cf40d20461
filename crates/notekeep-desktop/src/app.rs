//! Main application component

use dioxus::prelude::*;

use notekeep_core::notification::NOTIFICATION_TTL;
use notekeep_core::AppController;

use crate::components::load_notes;
use crate::platform::DesktopPlatform;
use crate::state::{AppState, Bootstrap};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let bootstrap = use_context::<Bootstrap>();
    let mut controller =
        use_signal(|| AppController::new(bootstrap.store.clone(), &bootstrap.config));
    let platform = use_signal(|| DesktopPlatform::new(bootstrap.config.share_origin.clone()));
    let mut scheduled_ticket = use_signal(|| 0u64);

    // Initial load
    use_effect(move || load_notes(controller));

    // Dismiss each notification after its display time unless a newer one replaced it
    use_effect(move || {
        let Some(ticket) = controller.read().notifications().latest().map(|n| n.ticket) else {
            return;
        };
        if ticket == *scheduled_ticket.peek() {
            return;
        }
        scheduled_ticket.set(ticket);
        spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            if controller.write().dismiss_notification(ticket) {
                tracing::debug!("Dismissed notification {}", ticket);
            }
        });
    });

    use_context_provider(|| AppState {
        controller,
        platform,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
            ",
            Home {}
        }
    }
}
