//! Note model

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
///
/// The note store may send it as a JSON number or a JSON string; both are
/// kept as text so the client never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NoteId(String);

impl NoteId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as a URL path segment
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A note as held by the note store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server-assigned identifier
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_public: bool,
    /// Creation timestamp set by the note store
    #[serde(default, deserialize_with = "deserialize_created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating or updating a note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub is_public: bool,
}

impl NoteDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, is_public: bool) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            is_public,
        }
    }
}

/// Parse a timestamp sent by the note store.
///
/// Accepts RFC 3339, ISO-8601 date-times with a colon-less offset
/// (`+0000`), zone-less date-times (taken as UTC) and bare `YYYY-MM-DD`
/// dates.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"] {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A timestamp the client cannot read becomes `None` so one odd note never
/// blocks the rest of the list from loading.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
        Other(IgnoredAny),
    }

    let parsed = match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawTimestamp::Millis(ms)) => {
            let parsed = DateTime::from_timestamp_millis(ms);
            if parsed.is_none() {
                tracing::warn!("Ignoring out-of-range createdAt: {}", ms);
            }
            parsed
        }
        Some(RawTimestamp::Text(text)) => {
            let parsed = parse_timestamp(&text);
            if parsed.is_none() {
                tracing::warn!("Ignoring unrecognized createdAt: {}", text);
            }
            parsed
        }
        Some(RawTimestamp::Other(_)) => {
            tracing::warn!("Ignoring createdAt that is neither a number nor a string");
            None
        }
    };
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_from_store_json() {
        let note: Note = serde_json::from_str(
            r#"{"id":7,"title":"Groceries","content":"milk, eggs","isPublic":false,"createdAt":"2024-03-05T10:15:30"}"#,
        )
        .unwrap();

        assert_eq!(note.id, NoteId::from(7));
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "milk, eggs");
        assert!(!note.is_public);
        assert_eq!(
            note.created_at.unwrap().to_rfc3339(),
            "2024-03-05T10:15:30+00:00"
        );
    }

    #[test]
    fn test_note_id_accepts_string() {
        let note: Note =
            serde_json::from_str(r#"{"id":"abc-1","title":"t","content":"","isPublic":true}"#)
                .unwrap();
        assert_eq!(note.id.as_str(), "abc-1");
        assert!(note.is_public);
        assert_eq!(note.created_at, None);
    }

    #[test]
    fn test_created_at_epoch_millis() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"","isPublic":false,"createdAt":0}"#,
        )
        .unwrap();
        assert_eq!(note.created_at, DateTime::from_timestamp_millis(0));
    }

    #[test]
    fn test_created_at_null() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"","isPublic":false,"createdAt":null}"#,
        )
        .unwrap();
        assert_eq!(note.created_at, None);
    }

    #[test]
    fn test_created_at_garbage_loads_without_date() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"","isPublic":false,"createdAt":"yesterday"}"#,
        )
        .unwrap();
        assert_eq!(note.created_at, None);
        assert_eq!(note.title, "t");
    }

    #[test]
    fn test_created_at_out_of_range_or_wrong_type_loads_without_date() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"","isPublic":false,"createdAt":9223372036854775807}"#,
        )
        .unwrap();
        assert_eq!(note.created_at, None);

        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"","isPublic":false,"createdAt":[2024,3,5]}"#,
        )
        .unwrap();
        assert_eq!(note.created_at, None);
    }

    #[test]
    fn test_one_odd_timestamp_does_not_block_the_list() {
        let notes: Vec<Note> = serde_json::from_str(
            r#"[
                {"id":1,"title":"Groceries","content":"milk","isPublic":false,"createdAt":"2024-03-05T10:15:30"},
                {"id":2,"title":"Trip","content":"bags","isPublic":true,"createdAt":"last tuesday"}
            ]"#,
        )
        .unwrap();

        assert_eq!(notes.len(), 2);
        assert!(notes[0].created_at.is_some());
        assert_eq!(notes[1].title, "Trip");
        assert_eq!(notes[1].created_at, None);
    }

    #[test]
    fn test_created_at_with_colonless_offset() {
        let notes: Vec<Note> = serde_json::from_str(
            r#"[
                {"id":1,"title":"a","content":"","isPublic":false,"createdAt":"2024-03-05T10:15:30"},
                {"id":2,"title":"b","content":"","isPublic":false,"createdAt":"2024-03-05T10:15:30.000+0000"}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            notes[1].created_at.unwrap().to_rfc3339(),
            "2024-03-05T10:15:30+00:00"
        );
        assert_eq!(
            parse_timestamp("2024-03-05T12:15:30+0200").unwrap().to_rfc3339(),
            "2024-03-05T10:15:30+00:00"
        );
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2024-03-05T10:15:30Z").is_some());
        assert!(parse_timestamp("2024-03-05T10:15:30.123456").is_some());
        assert!(parse_timestamp("2024-03-05 10:15:30").is_some());
        assert!(parse_timestamp("2024-03-05").is_some());
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = NoteDraft::new("Groceries", "milk, eggs", false);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title":"Groceries","content":"milk, eggs","isPublic":false})
        );
    }

    #[test]
    fn test_note_id_path_segment_is_encoded() {
        assert_eq!(NoteId::from("a b/c").to_path_segment(), "a%20b%2Fc");
        assert_eq!(NoteId::from(42).to_path_segment(), "42");
    }
}
