//! notekeep-core - Core library for Notekeep
//!
//! This crate contains the note model, the HTTP note store client, and the
//! controller and view models that the desktop shell renders. Nothing here
//! depends on a UI toolkit.

pub mod card;
pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod models;
pub mod notification;
pub mod platform;
pub mod search;
pub mod share;
pub mod store;
pub mod util;

pub use config::ClientConfig;
pub use controller::{AppController, Modal};
pub use error::{Error, Result};
pub use models::{Note, NoteDraft, NoteId};
pub use platform::Platform;
pub use store::{HttpNoteStore, NoteStore};
