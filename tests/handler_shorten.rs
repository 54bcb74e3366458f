mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shorturl::api::handlers::shorten_handler;
use shorturl::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "long_url": "https://example.com/some/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let code = body["short_url"].as_str().unwrap();

    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["long_url"], "https://example.com/some/path");
    assert_eq!(
        body["short_link"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_gets_distinct_codes() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    let payload = json!({ "long_url": "https://example.com" });

    let first = server.post("/api/shorten").json(&payload).await;
    first.assert_status(StatusCode::CREATED);
    let first_code = first.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let second = server.post("/api/shorten").json(&payload).await;
    second.assert_status(StatusCode::CREATED);
    let second_code = second.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    // The second submission hits the deterministic candidate and falls
    // back to a random draw.
    assert_ne!(first_code, second_code);
    assert_eq!(second_code.len(), 7);
}

#[tokio::test]
async fn test_shorten_rejects_invalid_url() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    for bad in ["not a url", "ftp://example.com", "javascript:alert(1)"] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "long_url": bad }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_shorten_rejects_control_characters_in_url() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    for bad in [
        "https://example.com/pa\tth",
        "https://example.com/\n",
        "https://example.com/a\u{1}b",
    ] {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "long_url": bad }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_shorten_custom_code() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "short_url": "mylink"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["short_url"], "mylink");
}

#[tokio::test]
async fn test_shorten_custom_code_conflict() {
    let (state, _rx, store) = common::create_test_state();
    common::create_test_url(&store, "https://first.example", "mylink").await;

    let server = make_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://second.example",
            "short_url": "mylink"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "conflict"
    );
}

#[tokio::test]
async fn test_shorten_custom_code_rejects_invalid_characters() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "short_url": "my-link!"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_attaches_tags() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "tags": "Rust Lang, docs, rust lang"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let tags = body["tags"].as_array().unwrap();

    // Duplicates collapse case-insensitively.
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["title"], "Rust Lang");
    assert_eq!(tags[0]["slug"], "rust-lang");
    assert_eq!(tags[1]["title"], "docs");
}

#[tokio::test]
async fn test_shorten_tags_with_colliding_slugs() {
    let (state, _rx, _store) = common::create_test_state();
    let server = make_server(state);

    // "Rust!" and "rust?" are distinct titles with the same slug.
    let response = server
        .post("/api/shorten")
        .json(&json!({
            "long_url": "https://example.com",
            "tags": "Rust!, rust?"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let tags = body["tags"].as_array().unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["title"], "Rust!");
    assert_eq!(tags[0]["slug"], "rust");
    assert_eq!(tags[1]["title"], "rust?");
    assert_eq!(tags[1]["slug"], "rust-2");
}
