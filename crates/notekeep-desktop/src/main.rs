//! Notekeep Desktop Application
//!
//! Lists, edits and shares notes held by a REST note store.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod platform;
mod state;
mod views;

use dioxus::desktop::{Config, WindowBuilder};
use notekeep_core::{ClientConfig, HttpNoteStore};
use tracing_subscriber::EnvFilter;

use crate::state::Bootstrap;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut filter = EnvFilter::from_default_env();
    for directive in ["notekeep=debug", "notekeep_core=debug"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Notekeep...");

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let store = match HttpNoteStore::new(config.api_base_url.clone()) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to create note store client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Using note store at {}", store.base_url());

    let window = WindowBuilder::new().with_title("My Notes");

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(Bootstrap { config, store })
        .launch(app::App);
}
