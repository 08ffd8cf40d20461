//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use notekeep_core::{AppController, ClientConfig, HttpNoteStore};

use crate::platform::DesktopPlatform;

pub type Controller = AppController<HttpNoteStore>;

/// Values handed from `main` to the root component
#[derive(Clone)]
pub struct Bootstrap {
    pub config: ClientConfig,
    pub store: HttpNoteStore,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Note cache, search term, open dialog and notification
    pub controller: Signal<Controller>,
    /// Clipboard and share origin
    pub platform: Signal<DesktopPlatform>,
}
