//! HTTP tests for the file endpoints.

mod common;

use http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");
}

#[tokio::test]
async fn test_list_files_unauthenticated() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/files", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/files", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_hides_unfinished_files() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    app.create_file(&alice, "done.tar", true).await;
    app.create_file(&alice, "partial.tar", false).await;
    let token = app.token_for(&alice);

    let response = app.request("GET", "/api/files", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "done.tar");
}

#[tokio::test]
async fn test_unfinished_file_is_not_found() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let file = app.create_file(&alice, "partial.tar", false).await;
    let token = app.token_for(&alice);

    let response = app
        .request("GET", &format!("/api/files/{}", file.id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_detail_view_hides_internal_fields() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let token = app.token_for(&alice);

    let response = app
        .request("GET", &format!("/api/files/{}", file.id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_object().unwrap();
    for key in ["path", "hashString", "isFinished", "torrentAddedAt"] {
        assert!(!data.contains_key(key), "{key} leaked");
    }
    assert_eq!(data["creator"]["login"], "alice");
    assert!(data["creator"].get("mail").is_none());
    assert!(data["creator"].get("password").is_none());
}

#[tokio::test]
async fn test_second_lock_conflicts() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let token = app.token_for(&alice);
    let uri = format!("/api/files/{}/lock", file.id);

    let first = app.request("POST", &uri, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", &uri, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(app.stored(&file).await.locked.len(), 1);
}

#[tokio::test]
async fn test_unlock_without_lock_is_state_error() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let token = app.token_for(&alice);

    let response = app
        .request(
            "DELETE",
            &format!("/api/files/{}/lock", file.id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "INVALID_STATE");
}

#[tokio::test]
async fn test_locked_list_returns_callers_files() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let mine = app.create_file(&alice, "mine.tar", true).await;
    let theirs = app.create_file(&alice, "theirs.tar", true).await;
    let alice_token = app.token_for(&alice);
    let bob_token = app.token_for(&bob);

    app.request("POST", &format!("/api/files/{}/lock", mine.id), None, Some(&alice_token))
        .await;
    app.request("POST", &format!("/api/files/{}/lock", theirs.id), None, Some(&bob_token))
        .await;

    let response = app
        .request("GET", "/api/files/locked", None, Some(&alice_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "mine.tar");
    assert_eq!(items[0]["lockedByViewer"], true);
}

#[tokio::test]
async fn test_comment_add_then_list() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let token = app.token_for(&bob);
    let uri = format!("/api/files/{}/comments", file.id);

    let created = app
        .request("POST", &uri, Some(json!({ "text": "seeding fine" })), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["author"]["login"], "bob");

    let listed = app.request("GET", &uri, None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let comments = listed.body["data"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "seeding fine");
}

#[tokio::test]
async fn test_empty_comment_is_rejected() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let token = app.token_for(&alice);

    let response = app
        .request(
            "POST",
            &format!("/api/files/{}/comments", file.id),
            Some(json!({ "text": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.stored(&file).await.comments.is_empty());
}

#[tokio::test]
async fn test_grade_lifecycle_reports_average() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let bob = app.create_user("bob").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let uri = format!("/api/files/{}/grade", file.id);

    let first = app
        .request("POST", &uri, Some(json!({ "grade": 4.0 })), Some(&app.token_for(&alice)))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["averageGrade"], 4.0);

    let second = app
        .request("POST", &uri, Some(json!({ "grade": 2.0 })), Some(&app.token_for(&bob)))
        .await;
    assert_eq!(second.body["data"]["averageGrade"], 3.0);

    let again = app
        .request("POST", &uri, Some(json!({ "grade": 5.0 })), Some(&app.token_for(&bob)))
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let removed = app
        .request("DELETE", &uri, None, Some(&app.token_for(&bob)))
        .await;
    assert_eq!(removed.body["data"]["averageGrade"], 4.0);
}

#[tokio::test]
async fn test_download_counter_increments() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let file = app.create_file(&alice, "done.tar", true).await;
    let token = app.token_for(&alice);
    let uri = format!("/api/files/{}/download", file.id);

    app.request("POST", &uri, None, Some(&token)).await;
    app.request("POST", &uri, None, Some(&token)).await;

    assert_eq!(app.stored(&file).await.downloads, 2);
}

#[tokio::test]
async fn test_unknown_sort_field_is_rejected() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let token = app.token_for(&alice);

    let response = app
        .request("GET", "/api/files?sort=hash_string", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_lookup_is_redacted() {
    let app = TestApp::new();
    let alice = app.create_user("alice").await;
    let token = app.token_for(&alice);

    let response = app
        .request("GET", &format!("/api/users/{}", alice.id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_object().unwrap();
    assert_eq!(data["login"], "alice");
    assert!(!data.contains_key("mail"));
    assert!(!data.contains_key("password"));
}
