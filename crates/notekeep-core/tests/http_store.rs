//! `HttpNoteStore` against a throwaway axum note store.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use notekeep_core::{Error, HttpNoteStore, NoteDraft, NoteId, NoteStore};

#[derive(Default)]
struct Backend {
    notes: Vec<Value>,
    next_id: i64,
    requests: Vec<String>,
}

type Shared = Arc<Mutex<Backend>>;

async fn list(State(backend): State<Shared>) -> Json<Vec<Value>> {
    let mut backend = backend.lock().unwrap();
    backend.requests.push("GET".to_string());
    Json(backend.notes.clone())
}

async fn create(State(backend): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut backend = backend.lock().unwrap();
    backend.requests.push(format!("POST {body}"));
    backend.next_id += 1;
    let note = json!({
        "id": backend.next_id,
        "title": body["title"],
        "content": body["content"],
        "isPublic": body["isPublic"],
        "createdAt": "2024-03-05T10:15:30",
    });
    backend.notes.push(note.clone());
    (StatusCode::CREATED, Json(note))
}

async fn update(
    State(backend): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> StatusCode {
    let mut backend = backend.lock().unwrap();
    backend.requests.push(format!("PUT {id} {body}"));
    let Some(note) = backend.notes.iter_mut().find(|n| n["id"] == json!(id)) else {
        return StatusCode::NOT_FOUND;
    };
    note["title"] = body["title"].clone();
    note["content"] = body["content"].clone();
    note["isPublic"] = body["isPublic"].clone();
    StatusCode::OK
}

async fn remove(State(backend): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut backend = backend.lock().unwrap();
    backend.requests.push(format!("DELETE {id}"));
    let before = backend.notes.len();
    backend.notes.retain(|n| n["id"] != json!(id));
    if backend.notes.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn note_store_server() -> (HttpNoteStore, Shared) {
    let backend = Shared::default();
    let app = Router::new()
        .route("/api/notes", get(list).post(create))
        .route("/api/notes/{id}", put(update).delete(remove))
        .with_state(backend.clone());
    let base_url = serve(app).await;
    (HttpNoteStore::new(base_url).unwrap(), backend)
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_round_trips_through_store() {
    let (store, backend) = note_store_server().await;

    store
        .create_note(&NoteDraft::new("Groceries", "milk, eggs", false))
        .await
        .unwrap();
    let notes = store.list_notes().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, NoteId::from(1));
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].content, "milk, eggs");
    assert!(!notes[0].is_public);
    assert!(notes[0].created_at.is_some());

    let requests = backend.lock().unwrap().requests.clone();
    let sent: Value = serde_json::from_str(requests[0].strip_prefix("POST ").unwrap()).unwrap();
    assert_eq!(
        sent,
        json!({"title": "Groceries", "content": "milk, eggs", "isPublic": false})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_address_note_by_id() {
    let (store, backend) = note_store_server().await;
    store
        .create_note(&NoteDraft::new("Trip", "pack", false))
        .await
        .unwrap();

    store
        .update_note(&NoteId::from(1), &NoteDraft::new("Trip", "pack bags", true))
        .await
        .unwrap();
    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes[0].content, "pack bags");
    assert!(notes[0].is_public);

    store.delete_note(&NoteId::from(1)).await.unwrap();
    assert!(store.list_notes().await.unwrap().is_empty());

    let requests = backend.lock().unwrap().requests.clone();
    assert!(requests.iter().any(|r| r.starts_with("PUT 1 ")));
    assert!(requests.contains(&"DELETE 1".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_note_surfaces_status_error() {
    let (store, _backend) = note_store_server().await;

    let result = store.delete_note(&NoteId::from(42)).await;
    assert!(matches!(result, Err(Error::Status { status: 404, .. })));

    let result = store
        .update_note(&NoteId::from(42), &NoteDraft::new("x", "", false))
        .await;
    assert!(matches!(result, Err(Error::Status { status: 404, .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_body_is_captured() {
    let app = Router::new().route(
        "/api/notes",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable") }),
    );
    let store = HttpNoteStore::new(serve(app).await).unwrap();

    match store.list_notes().await {
        Err(Error::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_list_body_is_an_http_error() {
    let app = Router::new().route("/api/notes", get(|| async { "not json" }));
    let store = HttpNoteStore::new(serve(app).await).unwrap();

    assert!(matches!(store.list_notes().await, Err(Error::Http(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreadable_created_at_still_lists_every_note() {
    let app = Router::new().route(
        "/api/notes",
        get(|| async {
            Json(json!([
                {"id": 1, "title": "Groceries", "content": "milk", "isPublic": false, "createdAt": "2024-03-05T10:15:30.000+0000"},
                {"id": 2, "title": "Trip", "content": "bags", "isPublic": true, "createdAt": "someday"}
            ]))
        }),
    );
    let store = HttpNoteStore::new(serve(app).await).unwrap();

    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes.len(), 2);
    assert!(notes[0].created_at.is_some());
    assert_eq!(notes[1].id, NoteId::from(2));
    assert_eq!(notes[1].created_at, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_store_is_an_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpNoteStore::new(format!("http://{addr}/api")).unwrap();
    assert!(matches!(store.list_notes().await, Err(Error::Http(_))));
}
