// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /api/records (valid + both validation failures)
// - GET /api/records with filter params
// - POST /api/records/{id}/review (idempotence)
// - DELETE /api/records/{id} and bulk clear
// - GET /api/export/{json,csv} headers
// - GET /api/options, GET /api/advisory

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use trade_checklist::api::{self, AppState};
use trade_checklist::store::RecordStore;

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses, backed by a throwaway data file.
fn test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = Arc::new(RecordStore::open(dir.path().join("records.json")));
    (dir, api::router(AppState { store }))
}

async fn read_json(resp: axum::response::Response) -> Json {
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json body")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request")
}

fn post_json(uri: &str, payload: &Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("build DELETE request")
}

fn acme_draft() -> Json {
    json!({
        "company": "Acme",
        "newsTitle": "Supplier change",
        "businessChosen": "A",
        "confidence": 8
    })
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let (_dir, app) = test_app();

    let resp = app.oneshot(get("/health")).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK, "health should be 200");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    assert_eq!(String::from_utf8(bytes).expect("utf8").trim(), "OK");
}

#[tokio::test]
async fn api_submit_creates_a_record_and_lists_it_first() {
    let (_dir, app) = test_app();

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &json!({
            "company": "Globex",
            "newsTitle": "Plant closure"
        })))
        .await
        .expect("oneshot create 1");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &acme_draft()))
        .await
        .expect("oneshot create 2");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(created["newsTitle"], json!("Supplier change"));
    // Catalog defaults fill the fields the draft left out.
    assert_eq!(created["impactDirection"], json!("neutral"));
    assert_eq!(created["revenueShare"], json!(">50%"));

    let resp = app.oneshot(get("/api/records")).await.expect("oneshot list");
    let list = read_json(resp).await;
    let list = list.as_array().expect("list is array");
    assert_eq!(list.len(), 2, "one record per successful submit");
    assert_eq!(list[0]["company"], json!("Acme"), "newest record first");
}

#[tokio::test]
async fn api_submit_rejects_missing_required_fields_in_order() {
    let (_dir, app) = test_app();

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &json!({ "company": "  " })))
        .await
        .expect("oneshot missing company");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(read_json(resp).await["error"], json!("missing company name"));

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/records",
            &json!({ "company": "Acme", "newsTitle": "" }),
        ))
        .await
        .expect("oneshot missing title");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(read_json(resp).await["error"], json!("missing news summary"));

    // Rejected submits never reach the store.
    let resp = app.oneshot(get("/api/records")).await.expect("oneshot list");
    assert_eq!(read_json(resp).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn api_filter_gates_on_text_business_and_direction() {
    let (_dir, app) = test_app();

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &acme_draft()))
        .await
        .expect("oneshot create");
    assert_eq!(resp.status(), StatusCode::CREATED);

    for (query, expected) in [
        ("text=acme", 1),
        ("text=zzz", 0),
        ("biz=B", 0),
        ("biz=A", 1),
        ("dir=neutral", 1),
        ("dir=bear", 0),
        ("text=ACME&biz=A&dir=all", 1),
    ] {
        let resp = app
            .clone()
            .oneshot(get(&format!("/api/records?{query}")))
            .await
            .expect("oneshot filtered list");
        let list = read_json(resp).await;
        assert_eq!(
            list.as_array().unwrap().len(),
            expected,
            "unexpected count for query {query}"
        );
    }
}

#[tokio::test]
async fn api_review_is_idempotent_and_404s_on_unknown_id() {
    let (_dir, app) = test_app();

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &acme_draft()))
        .await
        .expect("oneshot create");
    let id = read_json(resp).await["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(post_json(&format!("/api/records/{id}/review"), &json!({})))
        .await
        .expect("oneshot review once");
    let once = read_json(resp).await["notes"].as_str().unwrap().to_string();
    assert!(once.contains("reviewed"));

    let resp = app
        .clone()
        .oneshot(post_json(&format!("/api/records/{id}/review"), &json!({})))
        .await
        .expect("oneshot review twice");
    let twice = read_json(resp).await["notes"].as_str().unwrap().to_string();
    assert_eq!(once, twice, "second review must not grow the marker");

    let resp = app
        .oneshot(post_json("/api/records/not-an-id/review", &json!({})))
        .await
        .expect("oneshot review unknown");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_delete_and_clear_empty_the_list() {
    let (_dir, app) = test_app();

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &acme_draft()))
        .await
        .expect("oneshot create");
    let id = read_json(resp).await["id"].as_str().unwrap().to_string();

    // Removing an unknown id is a quiet no-op.
    let resp = app
        .clone()
        .oneshot(delete("/api/records/unknown"))
        .await
        .expect("oneshot delete unknown");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(delete(&format!("/api/records/{id}")))
        .await
        .expect("oneshot delete");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &acme_draft()))
        .await
        .expect("oneshot create again");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(delete("/api/records"))
        .await
        .expect("oneshot clear");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(get("/api/records")).await.expect("oneshot list");
    assert_eq!(read_json(resp).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn api_exports_attach_a_dated_file_and_ignore_filters() {
    let (_dir, app) = test_app();

    let resp = app
        .clone()
        .oneshot(post_json("/api/records", &acme_draft()))
        .await
        .expect("oneshot create");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(get("/api/export/csv"))
        .await
        .expect("oneshot export csv");
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    assert!(disposition.starts_with("attachment; filename=\"checklist_records_"));
    assert!(disposition.ends_with(".csv\""));

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read csv")
        .to_vec();
    let text = String::from_utf8(bytes).expect("utf8 csv");
    assert!(text.starts_with("\"date\",\"company\",\"newsTitle\""));
    assert!(text.contains("\"Acme\""));

    let resp = app
        .oneshot(get("/api/export/json"))
        .await
        .expect("oneshot export json");
    assert_eq!(resp.status(), StatusCode::OK);
    let parsed = read_json(resp).await;
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn api_options_exposes_all_four_catalogs() {
    let (_dir, app) = test_app();

    let resp = app
        .oneshot(get("/api/options"))
        .await
        .expect("oneshot options");
    let v = read_json(resp).await;
    for key in [
        "businessTypes",
        "revenueShareOptions",
        "impactDirections",
        "impactStrengthOptions",
    ] {
        assert_eq!(
            v[key].as_array().map(|a| a.len()),
            Some(3),
            "catalog {key} should have 3 entries"
        );
    }
    assert_eq!(v["revenueShareOptions"][0]["value"], json!(">50%"));
}

#[tokio::test]
async fn api_advisory_maps_confidence_bands_to_hints() {
    let (_dir, app) = test_app();

    for (confidence, needle) in [
        (9, "Hard evidence"),
        (5, "single-source, caution"),
        (2, "Highly uncertain"),
    ] {
        let resp = app
            .clone()
            .oneshot(get(&format!("/api/advisory?confidence={confidence}")))
            .await
            .expect("oneshot advisory");
        let v = read_json(resp).await;
        assert!(
            v["hint"].as_str().unwrap().contains(needle),
            "confidence {confidence} should mention '{needle}'"
        );
    }
}
