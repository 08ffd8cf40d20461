//! Note card view model.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::{Note, NoteId};

pub const PUBLIC_BADGE: &str = "Public";

/// Buttons on a card, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Share,
    Edit,
    Delete,
}

/// Everything the shell needs to render one note card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCardView {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub date_label: String,
    pub show_public_badge: bool,
    pub actions: Vec<CardAction>,
}

impl NoteCardView {
    /// Card for `note` with its date in the local time zone
    pub fn new(note: &Note, date_format: &str) -> Self {
        Self::in_zone(note, date_format, &Local)
    }

    pub fn in_zone<Tz>(note: &Note, date_format: &str, zone: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut actions = Vec::with_capacity(3);
        if note.is_public {
            actions.push(CardAction::Share);
        }
        actions.extend([CardAction::Edit, CardAction::Delete]);

        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            date_label: format_date(note.created_at, date_format, zone),
            show_public_badge: note.is_public,
            actions,
        }
    }

    pub fn can_share(&self) -> bool {
        self.actions.contains(&CardAction::Share)
    }
}

/// Date-only label; empty when the timestamp is missing
pub fn format_date<Tz>(created_at: Option<DateTime<Utc>>, date_format: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    created_at
        .map(|ts| ts.with_timezone(zone).format(date_format).to_string())
        .unwrap_or_default()
}
