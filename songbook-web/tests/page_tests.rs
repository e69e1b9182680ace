//! Integration tests for the songbook-web pages
//!
//! Each test drives the full router over a fresh in-memory database:
//! form submissions, redirects, and the rendered HTML.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use songbook_web::{build_router, AppState};

/// Test helper: build the app over a fresh in-memory database
async fn setup_app() -> axum::Router {
    let db = songbook_common::db::init_memory_database()
        .await
        .expect("in-memory database");
    build_router(AppState::new(db))
}

/// Test helper: GET request
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: POST request with a urlencoded form body
fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: read a response body as text
async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

/// Test helper: minimal form-value encoding
fn encode(value: &str) -> String {
    value.replace(' ', "+").replace('\n', "%0A")
}

/// Test helper: complete record form body with every field present
fn record_form(title: &str, writers: &str, release_date: &str) -> String {
    format!(
        "title={}&writers={}&producers=&genres=Pop&releaseDate={}\
         &songHours=&songMinutes=3&songSeconds=45&links=&lyrics=la+la",
        encode(title),
        encode(writers),
        encode(release_date),
    )
}

/// Test helper: POST a new record, asserting the redirect, and return
/// the detail page path it points at
async fn create_record(app: &axum::Router, form: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_form("/records/new", form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[header::LOCATION]
        .to_str()
        .expect("Location should be a string")
        .to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body: Value = serde_json::from_slice(&bytes).expect("Should parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "songbook-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_page_has_navigation() {
    let app = setup_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("/records/new"));
    assert!(body.contains("/search"));
}

#[tokio::test]
async fn test_create_and_view_record() {
    let app = setup_app().await;

    let location = create_record(&app, &record_form("Test Song", "Alice\nBob", "2020-05-01")).await;
    assert!(location.starts_with("/records/"));

    let response = app.oneshot(get(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("Test Song"));
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));
    assert!(body.contains("00:03:45"));
    assert!(body.contains("2020-05-01"));
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = setup_app().await;

    // No lyrics field at all (an empty value would be fine)
    let body = "title=X&writers=&producers=&genres=&releaseDate=2020-01-01\
                &songHours=&songMinutes=&songSeconds=&links=";
    let response = app.oneshot(post_form("/records/new", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("lyrics"));
}

#[tokio::test]
async fn test_view_unknown_record_shows_missing_state() {
    let app = setup_app().await;

    let uri = format!("/records/{}", uuid::Uuid::new_v4());
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("does not exist"));
}

#[tokio::test]
async fn test_view_malformed_id_shows_missing_state() {
    let app = setup_app().await;

    let response = app.oneshot(get("/records/not-a-valid-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("does not exist"));
}

#[tokio::test]
async fn test_edit_page_prefills_form() {
    let app = setup_app().await;

    let location = create_record(&app, &record_form("Test Song", "Alice\nBob", "2020-05-01")).await;

    let response = app.oneshot(get(&format!("{location}/edit"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains(r#"value="Test Song""#));
    assert!(body.contains("Alice\nBob"));
    assert!(body.contains(r#"value="2020-05-01""#));
}

#[tokio::test]
async fn test_edit_page_for_unknown_record_is_404() {
    let app = setup_app().await;

    let uri = format!("/records/{}/edit", uuid::Uuid::new_v4());
    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_record_replaces_fields() {
    let app = setup_app().await;

    let location = create_record(&app, &record_form("Old Title", "Alice", "2020-05-01")).await;

    let response = app
        .clone()
        .oneshot(post_form(
            &format!("{location}/edit"),
            &record_form("New Title", "Carol", "2021-06-02"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION].to_str().unwrap(), location);

    let response = app.oneshot(get(&location)).await.unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("New Title"));
    assert!(body.contains("Carol"));
    assert!(!body.contains("Old Title"));
    assert!(!body.contains("Alice"));
}

#[tokio::test]
async fn test_update_unknown_record_is_404() {
    let app = setup_app().await;

    let uri = format!("/records/{}/edit", uuid::Uuid::new_v4());
    let response = app
        .oneshot(post_form(&uri, &record_form("X", "Y", "2020-01-01")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_record_flow() {
    let app = setup_app().await;

    let location = create_record(&app, &record_form("Doomed", "Alice", "2020-05-01")).await;

    // Confirmation page names the record
    let response = app
        .clone()
        .oneshot(get(&format!("{location}/delete")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response.into_body()).await;
    assert!(body.contains("Doomed"));

    // Delete redirects back to the detail page
    let response = app
        .clone()
        .oneshot(post_form(&format!("{location}/delete"), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION].to_str().unwrap(), location);

    // The record is gone
    let response = app.clone().oneshot(get(&location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response.into_body()).await;
    assert!(body.contains("does not exist"));

    // Deleting again is a no-op, not an error
    let response = app
        .oneshot(post_form(&format!("{location}/delete"), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_search_without_criteria_lists_all() {
    let app = setup_app().await;

    create_record(&app, &record_form("Song A", "Alice", "2020-05-01")).await;
    create_record(&app, &record_form("Song B", "Bob", "2021-06-02")).await;

    let response = app.oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response.into_body()).await;
    assert!(body.contains("Song A"));
    assert!(body.contains("Song B"));
}

#[tokio::test]
async fn test_search_by_title_is_exact() {
    let app = setup_app().await;

    create_record(&app, &record_form("Exact", "Alice", "2020-05-01")).await;
    create_record(&app, &record_form("Exact Plus", "Alice", "2020-05-01")).await;

    let response = app.oneshot(get("/search?title=Exact")).await.unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("1 record found"));
    assert!(!body.contains("Exact Plus"));
}

#[tokio::test]
async fn test_search_by_year() {
    let app = setup_app().await;

    create_record(&app, &record_form("Old Song", "Alice", "1999-12-31")).await;
    create_record(&app, &record_form("New Song", "Alice", "2020-01-01")).await;

    let response = app.oneshot(get("/search?year=2020")).await.unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("New Song"));
    assert!(!body.contains("Old Song"));
}

#[tokio::test]
async fn test_search_criteria_are_conjunctive() {
    let app = setup_app().await;

    create_record(&app, &record_form("Match", "Alice", "2020-05-01")).await;
    create_record(&app, &record_form("Wrong Writer", "Bob", "2020-05-01")).await;
    create_record(&app, &record_form("Wrong Year", "Alice", "2021-05-01")).await;

    let response = app
        .oneshot(get("/search?writer=Alice&year=2020"))
        .await
        .unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("Match"));
    assert!(!body.contains("Wrong Writer"));
    assert!(!body.contains("Wrong Year"));
}

#[tokio::test]
async fn test_search_with_empty_values_lists_all() {
    let app = setup_app().await;

    create_record(&app, &record_form("Song A", "Alice", "2020-05-01")).await;

    let response = app
        .oneshot(get("/search?title=&writer=&year="))
        .await
        .unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("Song A"));
}

#[tokio::test]
async fn test_duplicate_titles_are_accepted() {
    let app = setup_app().await;

    create_record(&app, &record_form("Same Title", "Alice", "2020-05-01")).await;
    create_record(&app, &record_form("Same Title", "Bob", "2021-06-02")).await;

    let response = app.oneshot(get("/search?title=Same+Title")).await.unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("2 records found"));
}

#[tokio::test]
async fn test_record_fields_are_html_escaped() {
    let app = setup_app().await;

    let location = create_record(
        &app,
        &record_form("<script>alert(1)</script>", "Alice", "2020-05-01"),
    )
    .await;

    let response = app.oneshot(get(&location)).await.unwrap();
    let body = body_text(response.into_body()).await;
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>alert(1)</script>"));
}
