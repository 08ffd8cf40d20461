//! Share links and the share dialog.

use crate::models::{Note, NoteId};

pub const SHARE_TITLE: &str = "Share Note";
pub const SHARE_INTRO: &str = "Share this public note with others using the link below:";
pub const SHARE_DISCLAIMER: &str =
    "Only public notes can be shared. Make sure your note is set to public.";

/// `{origin}/share/{id}`
pub fn build_share_link(origin: &str, id: &NoteId) -> String {
    format!(
        "{}/share/{}",
        origin.trim_end_matches('/'),
        id.to_path_segment()
    )
}

/// What the share dialog shows for one note.
///
/// Public visibility is not checked here; the card only offers sharing for
/// public notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePresenter {
    pub note_id: NoteId,
    pub url: String,
}

impl SharePresenter {
    pub fn new(note: &Note, origin: &str) -> Self {
        Self {
            note_id: note.id.clone(),
            url: build_share_link(origin, &note.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_link_from_origin_and_id() {
        assert_eq!(
            build_share_link("http://localhost:3000", &NoteId::from(5)),
            "http://localhost:3000/share/5"
        );
        assert_eq!(
            build_share_link("https://notes.example.com/", &NoteId::from("a/b")),
            "https://notes.example.com/share/a%2Fb"
        );
    }

    #[test]
    fn presenter_carries_note_id_and_url() {
        let note = Note {
            id: NoteId::from(9),
            title: "Trip".to_string(),
            content: String::new(),
            is_public: true,
            created_at: None,
        };
        let presenter = SharePresenter::new(&note, "http://localhost:3000");

        assert_eq!(presenter.note_id, NoteId::from(9));
        assert_eq!(presenter.url, "http://localhost:3000/share/9");
    }
}
