//! Client-side note search.
//!
//! A note matches when its title or content contains the search term as a
//! case-insensitive substring. The empty term matches everything.

use crate::models::Note;

/// Whether `note` matches an already-lowercased term
fn matches_lowercase(note: &Note, term: &str) -> bool {
    note.title.to_lowercase().contains(term) || note.content.to_lowercase().contains(term)
}

/// Notes matching `term`, in cache order
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    if term.is_empty() {
        return notes.iter().collect();
    }
    let term = term.to_lowercase();
    notes
        .iter()
        .filter(|note| matches_lowercase(note, &term))
        .collect()
}
