//! End-to-end contract tests against a stub backend.
//!
//! The stub binds an ephemeral port and records what actually arrives on
//! the wire (headers, raw query strings, access state), so these tests
//! exercise the full dispatch path: cookie jar, token relay, content-type
//! negotiation, and query encoding.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};

use client::ApiClient;
use client::types::AccessRole;

/// Raw cookie value set by the stub; percent-decodes to `tok:alpha beta`.
const RAW_COOKIE_TOKEN: &str = "tok%3Aalpha%20beta";
const DECODED_TOKEN: &str = "tok:alpha beta";

#[derive(Default)]
struct Stub {
    boards: Mutex<HashMap<i64, Value>>,
    access: Mutex<HashMap<(i64, String), String>>,
    next_board_id: AtomicI64,
    login_csrf_header: Mutex<Option<Option<String>>>,
    login_content_type: Mutex<Option<String>>,
    upload_content_type: Mutex<Option<String>>,
    search_query: Mutex<Option<String>>,
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn csrf(State(_stub): State<Arc<Stub>>) -> impl IntoResponse {
    (
        [(
            header::SET_COOKIE,
            format!("csrftoken={RAW_COOKIE_TOKEN}; Path=/"),
        )],
        Json(json!({ "message": "CSRF cookie set", "csrftoken": DECODED_TOKEN })),
    )
}

async fn login(
    State(stub): State<Arc<Stub>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    *stub.login_csrf_header.lock().unwrap() = Some(header_string(&headers, "x-csrftoken"));
    *stub.login_content_type.lock().unwrap() = header_string(&headers, "content-type");
    Json(json!({
        "id": 1,
        "username": body.get("username").and_then(Value::as_str).unwrap_or_default(),
        "email": "alice@example.com",
        "is_staff": true,
        "is_active": true,
    }))
}

async fn create_board(State(stub): State<Arc<Stub>>, Json(body): Json<Value>) -> Json<Value> {
    let id = stub.next_board_id.fetch_add(1, Ordering::SeqCst) + 1;
    let board = json!({
        "id": id,
        "name": body.get("name").and_then(Value::as_str).unwrap_or_default(),
        "owner": { "id": 1, "username": "alice", "email": "alice@example.com" },
        "sticky_notes": [],
        "drawings": [],
        "access_rights": [],
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z",
    });
    stub.boards.lock().unwrap().insert(id, board.clone());
    Json(board)
}

async fn get_board(State(stub): State<Arc<Stub>>, Path(id): Path<i64>) -> Response {
    match stub.boards.lock().unwrap().get(&id) {
        Some(board) => Json(board.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn grant_access(
    State(stub): State<Arc<Stub>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let username = body
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let role = body
        .get("role")
        .and_then(Value::as_str)
        .unwrap_or("view")
        .to_owned();
    stub.access
        .lock()
        .unwrap()
        .insert((id, username.clone()), role.clone());
    Json(json!({
        "id": 1,
        "user": { "id": 2, "username": username, "email": "bob@example.com" },
        "role": role,
        "created_at": "2024-03-01T11:00:00Z",
    }))
}

async fn add_image(
    State(stub): State<Arc<Stub>>,
    Path(_id): Path<i64>,
    headers: HeaderMap,
) -> Json<Value> {
    *stub.upload_content_type.lock().unwrap() = header_string(&headers, "content-type");
    Json(json!({ "id": 7, "image": "/media/sticky_notes/pixel.png" }))
}

async fn search_users(State(stub): State<Arc<Stub>>, RawQuery(query): RawQuery) -> Json<Value> {
    *stub.search_query.lock().unwrap() = query;
    Json(json!([]))
}

fn stub_app(stub: Arc<Stub>) -> Router {
    Router::new()
        .route("/api/auth/csrf/", get(csrf))
        .route("/api/auth/login/", post(login))
        .route("/api/whiteboards/", post(create_board))
        .route("/api/whiteboards/{id}/", get(get_board))
        .route("/api/whiteboards/{id}/grant_access/", post(grant_access))
        .route("/api/sticky-notes/{id}/add_image/", post(add_image))
        .route("/api/users/search/", get(search_users))
        .with_state(stub)
}

async fn spawn_stub() -> (Arc<Stub>, SocketAddr) {
    let stub = Arc::new(Stub::default());
    let app = stub_app(Arc::clone(&stub));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (stub, addr)
}

fn api_client(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&format!("http://{addr}/api")).unwrap()
}

#[tokio::test]
async fn mutating_call_relays_decoded_cookie_as_csrf_header() {
    let (stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    api.get_csrf_token().await.unwrap();
    api.login("alice", "hunter2").await.unwrap();

    let seen = stub.login_csrf_header.lock().unwrap().clone().unwrap();
    assert_eq!(seen, Some(DECODED_TOKEN.to_owned()));
}

#[tokio::test]
async fn plain_json_call_carries_json_content_type() {
    let (stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    api.login("alice", "hunter2").await.unwrap();

    let content_type = stub.login_content_type.lock().unwrap().clone();
    assert_eq!(content_type, Some("application/json".to_owned()));
}

#[tokio::test]
async fn mutating_call_without_cookie_proceeds_headerless() {
    let (stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    // No csrf priming: the interceptor defers the failure to the backend.
    api.login("alice", "hunter2").await.unwrap();

    let seen = stub.login_csrf_header.lock().unwrap().clone().unwrap();
    assert_eq!(seen, None);
}

#[tokio::test]
async fn image_upload_is_multipart_not_json() {
    let (stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    let image = api
        .add_image_to_note(5, "pixel.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(image.id, 7);

    let content_type = stub.upload_content_type.lock().unwrap().clone().unwrap();
    assert!(
        content_type.starts_with("multipart/form-data; boundary="),
        "unexpected content type: {content_type}"
    );
}

#[tokio::test]
async fn repeated_grant_access_settles_on_one_row() {
    let (stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    let first = api.grant_access(3, "bob", AccessRole::Edit).await.unwrap();
    let second = api.grant_access(3, "bob", AccessRole::Edit).await.unwrap();
    assert_eq!(first.role, AccessRole::Edit);
    assert_eq!(second.role, AccessRole::Edit);

    let access = stub.access.lock().unwrap();
    assert_eq!(access.len(), 1);
    assert_eq!(access.get(&(3, "bob".to_owned())), Some(&"edit".to_owned()));
}

#[tokio::test]
async fn created_whiteboard_reads_back_with_its_name() {
    let (_stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    let created = api.create_whiteboard("A").await.unwrap();
    let fetched = api.get_whiteboard(created.id).await.unwrap();
    assert_eq!(fetched.name, "A");
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn search_query_encodes_spaces_as_percent20() {
    let (stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    let results = api.search_users("a b").await.unwrap();
    assert!(results.is_empty());

    let query = stub.search_query.lock().unwrap().clone();
    assert_eq!(query, Some("q=a%20b".to_owned()));
}

#[tokio::test]
async fn error_status_surfaces_with_status_and_body() {
    let (_stub, addr) = spawn_stub().await;
    let api = api_client(addr);

    let error = api.get_whiteboard(9999).await.unwrap_err();
    assert_eq!(error.status(), Some(reqwest::StatusCode::NOT_FOUND));
}
