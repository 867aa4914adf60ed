use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use secrecy::Secret;
use serde_json::json;

use review_actions::{ActionError, ApprovalState, EndUserApi, HttpEndUserApi};

const TOKEN: &str = "test-token";

fn end_user_json(id: &str, state: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": format!("{id}@example.com"),
        "approval_state": state,
        "created_at": "2025-01-01T09:00:00Z",
        "updated_at": "2025-01-01T09:00:00Z"
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

async fn get_end_user(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "NOT_FOUND", "message": "End user not found"})),
        )
            .into_response();
    }
    Json(end_user_json(&id, "pending")).into_response()
}

async fn approve(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(end_user_json(&id, "approved")).into_response()
}

async fn reject(Path(id): Path<String>) -> Response {
    if id == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "INTERNAL_ERROR", "message": "An internal error occurred"})),
        )
            .into_response();
    }
    Json(end_user_json(&id, "rejected")).into_response()
}

async fn next(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("after").map(String::as_str) {
        Some("eu-1") => Json(end_user_json("eu-2", "pending")).into_response(),
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => Json(end_user_json("eu-1", "pending")).into_response(),
    }
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/v1/end-users/next", get(next))
        .route("/v1/end-users/{id}", get(get_end_user))
        .route("/v1/end-users/{id}/approve", patch(approve))
        .route("/v1/end-users/{id}/reject", patch(reject));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn client(base_url: &str, token: &str) -> HttpEndUserApi {
    HttpEndUserApi::new(base_url, Secret::new(token.to_string())).unwrap()
}

#[tokio::test]
async fn test_get_and_decide_with_bearer_token() {
    let base_url = spawn_server().await;
    let api = client(&base_url, TOKEN);

    let fetched = api.get_end_user("eu-1").await.unwrap();
    assert_eq!(fetched.approval_state, ApprovalState::Pending);

    let approved = api.approve_end_user("eu-1").await.unwrap();
    assert_eq!(approved.approval_state, ApprovalState::Approved);

    let rejected = api.reject_end_user("eu-1").await.unwrap();
    assert_eq!(rejected.approval_state, ApprovalState::Rejected);
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let base_url = spawn_server().await;

    let bad_token = client(&base_url, "wrong");
    assert!(matches!(bad_token.get_end_user("eu-1").await, Err(ActionError::Unauthorized)));

    let api = client(&base_url, TOKEN);
    assert!(matches!(api.get_end_user("missing").await, Err(ActionError::NotFound)));

    match api.reject_end_user("broken").await {
        Err(ActionError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "An internal error occurred");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_next_end_user_walks_queue() {
    let base_url = spawn_server().await;
    let api = client(&base_url, TOKEN);

    let head = api.next_end_user(None).await.unwrap().unwrap();
    assert_eq!(head.id, "eu-1");

    let second = api.next_end_user(Some("eu-1")).await.unwrap().unwrap();
    assert_eq!(second.id, "eu-2");

    assert!(api.next_end_user(Some("eu-2")).await.unwrap().is_none());
}

#[tokio::test]
async fn test_end_user_id_is_a_single_path_segment() {
    let base_url = spawn_server().await;
    let api = client(&base_url, TOKEN);

    let fetched = api.get_end_user("eu/1?x=2").await.unwrap();
    assert_eq!(fetched.id, "eu/1?x=2");

    let approved = api.approve_end_user("eu 1/approve").await.unwrap();
    assert_eq!(approved.id, "eu 1/approve");
    assert_eq!(approved.approval_state, ApprovalState::Approved);
}

#[tokio::test]
async fn test_base_url_must_be_absolute() {
    assert!(matches!(
        HttpEndUserApi::new("not a url", Secret::new(TOKEN.to_string())),
        Err(ActionError::InvalidUrl(_))
    ));
}
