//! API integration tests

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use lending_desk::{
    api,
    catalog::{Catalog, FixedClock},
    AppConfig, AppState,
};

const BASE_URL: &str = "/api/v1";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// Helper to build the router over a freshly seeded catalog
fn app() -> Router {
    let catalog = Catalog::seeded(Arc::new(FixedClock(today()))).unwrap();
    api::router(AppState::new(AppConfig::default(), catalog))
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_URL, path));
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, path, body).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 21);
    assert_eq!(body["seeded"], true);
}

#[tokio::test]
async fn test_search_by_title_ignores_case() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/books?title=hobbit", None).await;

    assert_eq!(status, StatusCode::OK);
    let books = body.as_array().expect("Expected a list");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "The Hobbit");
    assert_eq!(books[0]["display"], "[BK014] The Hobbit by J.R.R. Tolkien - Available");
}

#[tokio::test]
async fn test_search_by_author_keeps_catalog_order() {
    let app = app();
    let (_, body) = send_json(&app, Method::GET, "/books?author=DICKENS", None).await;

    let codes: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, ["BK002", "BK008"]);
}

#[tokio::test]
async fn test_empty_title_lists_every_book() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/books?title=", None).await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["code"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<_> = (1..=21).map(|n| format!("BK{:03}", n)).collect();
    assert_eq!(codes, expected);
}

#[tokio::test]
async fn test_malformed_requests_use_error_body() {
    let app = app();

    let (status, body) = send_json(&app, Method::GET, "/books?status=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 18);

    let (status, body) = send_json(&app, Method::GET, "/listing?status=bogus", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "borrower": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_borrow_return_scenario() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "borrower": "Alice", "code": "BK001" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["loan"]["title"], "1984");
    assert_eq!(body["loan"]["due_date"], "2024-03-06");
    assert_eq!(body["loan"]["days_remaining"], 5);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "borrower": "Bob", "code": "BK001" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "ItemNotAvailable");
    assert_eq!(body["details"]["borrower"], "Alice");
    assert_eq!(body["details"]["days_remaining"], 5);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans/return",
        Some(json!({ "borrower": "Bob", "code": "BK001" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "WrongBorrower");

    let (_, body) = send_json(&app, Method::GET, "/books/BK001", None).await;
    assert_eq!(body["available"], false);
    assert_eq!(
        body["display"],
        "[BK001] 1984 by George Orwell - Borrowed by: Alice (Due in 5 days)"
    );

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans/return",
        Some(json!({ "borrower": "Alice", "code": "BK001" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "returned");
    assert_eq!(body["book"]["available"], true);
    assert_eq!(body["book"]["borrower"], Value::Null);
    assert_eq!(body["book"]["due_date"], Value::Null);
}

#[tokio::test]
async fn test_return_available_book() {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans/return",
        Some(json!({ "borrower": "Alice", "code": "BK005" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "NotBorrowed");
}

#[tokio::test]
async fn test_borrow_unknown_book() {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "borrower": "Alice", "code": "BK999" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchItem");
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let app = app();
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "borrower": "   ", "code": "BK001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter your name");

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "code": "BK100", "title": "", "author": "Someone" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // nothing was borrowed or added
    let (_, body) = send_json(&app, Method::GET, "/books?status=borrowed", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
    let (status, _) = send_json(&app, Method::GET, "/books/BK100", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_and_remove_book() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "code": " BK100 ", "title": "Solaris", "author": "Stanisław Lem" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "BK100");
    assert_eq!(body["available"], true);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "code": "BK100", "title": "Other", "author": "Other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (_, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(body["books"], 22);

    let (status, _) = send_json(&app, Method::DELETE, "/books/BK100", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_json(&app, Method::DELETE, "/books/BK100", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_text_listing() {
    let app = app();
    let (status, bytes) = send(&app, Method::GET, "/listing?status=borrowed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "No books found.\n");

    send(
        &app,
        Method::POST,
        "/loans",
        Some(json!({ "borrower": "Alice", "code": "BK014" })),
    )
    .await;

    let (_, bytes) = send(&app, Method::GET, "/listing?status=borrowed", None).await;
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "[BK014] The Hobbit by J.R.R. Tolkien - Borrowed by: Alice (Due in 5 days)\n\n"
    );

    let (_, bytes) = send(&app, Method::GET, "/listing?status=available", None).await;
    let listing = String::from_utf8(bytes).unwrap();
    assert!(listing.starts_with("[BK001] 1984 by George Orwell - Available\n\n"));
    assert!(!listing.contains("BK014"));
}

#[tokio::test]
async fn test_code_named_listing_is_reachable() {
    let app = app();
    let (status, _) = send_json(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "code": "listing", "title": "Catalogue", "author": "Anonymous" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, Method::GET, "/books/listing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "listing");
    assert_eq!(body["title"], "Catalogue");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/loans"].is_object());
    assert!(doc["paths"]["/books/{code}"].is_object());
    assert!(doc["paths"]["/listing"].is_object());
}
