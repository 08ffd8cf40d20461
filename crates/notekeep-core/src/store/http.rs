//! REST client for the note store.

use reqwest::{Method, RequestBuilder, Response};

use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId};
use crate::util::{compact_text, normalize_http_url};

use super::NoteStore;

/// HTTP client for the note store REST API.
#[derive(Debug, Clone)]
pub struct HttpNoteStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteStore {
    /// Builds a client for an explicit API base URL, e.g. `http://localhost:8081/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_http_url(base_url.into().as_str(), "API base URL")?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/notes/{}", self.base_url, id.to_path_segment())
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

impl NoteStore for HttpNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let response = self.request(Method::GET, self.notes_url()).send().await?;
        let response = ensure_success(response).await?;
        let notes = response.json::<Vec<Note>>().await?;
        tracing::debug!("Fetched {} notes", notes.len());
        Ok(notes)
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<()> {
        let response = self
            .request(Method::POST, self.notes_url())
            .json(draft)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn update_note(&self, id: &NoteId, draft: &NoteDraft) -> Result<()> {
        let response = self
            .request(Method::PUT, self.note_url(id))
            .json(draft)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete_note(&self, id: &NoteId) -> Result<()> {
        let response = self
            .request(Method::DELETE, self.note_url(id))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status,
        body: compact_text(&body),
    })
}
