use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use server::{ServerState, router};

const OPERATOR: &str = "munshi";

async fn test_router() -> Router {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    let engine = engine::Engine::builder()
        .database(db)
        .build()
        .await
        .expect("engine");

    router(ServerState {
        engine: Arc::new(engine),
    })
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-operator", OPERATOR)
        .header("content-type", "application/json");

    match body {
        Some(body) => builder.body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

async fn seed_geography(app: &Router) {
    let response = app
        .clone()
        .oneshot(request("POST", "/zones", Some(json!({ "name": "ہزارہ" }))))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/sub-units",
            Some(json!({ "zone": "ہزارہ", "name": "بٹگرام" })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
}

fn transaction_body() -> Value {
    json!({
        "zone": "ہزارہ",
        "sub_unit": "بٹگرام",
        "date": "2026-03-01",
        "book_number": "K-1",
        "start_number": 500,
        "end_number": 509,
        "count": 10,
        "gross_income": 12000
    })
}

#[tokio::test]
async fn missing_operator_header_is_unauthorized() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/zones")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn blank_operator_header_is_unauthorized() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/zones")
                .header("x-operator", "   ")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_and_fetch_transaction() {
    let app = test_router().await;
    seed_geography(&app).await;

    let response = app
        .clone()
        .oneshot(request("POST", "/transactions", Some(transaction_body())))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = json_body(response).await;
    assert_eq!(created["ticket_number"], 1);
    assert_eq!(created["created_by"], OPERATOR);
    assert_eq!(created["final_balance"], 12000);
    assert_eq!(created["trolly"]["count"], 10);
    assert_eq!(created["synced"], false);

    let id = created["id"].as_i64().expect("transaction id");
    let response = app
        .oneshot(request("GET", &format!("/transactions/{id}"), None))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = json_body(response).await;
    assert_eq!(fetched["book_number"], "K-1");
    assert_eq!(fetched["ticket_number"], 1);
}

#[tokio::test]
async fn transaction_for_unknown_sub_unit_is_not_found() {
    let app = test_router().await;

    let response = app
        .oneshot(request("POST", "/transactions", Some(transaction_body())))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn akhrajat_line_updates_transaction_totals() {
    let app = test_router().await;
    seed_geography(&app).await;

    let response = app
        .clone()
        .oneshot(request("POST", "/transactions", Some(transaction_body())))
        .await
        .expect("response");
    let id = json_body(response).await["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/akhrajat",
            Some(json!({
                "transaction_id": id,
                "title": "mazdoori",
                "description": "مزدوری کا خرچ",
                "amount": 2000
            })),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(request("GET", &format!("/transactions/{id}"), None))
        .await
        .expect("response");
    let fetched = json_body(response).await;
    assert_eq!(fetched["total_expense"], 2000);
    assert_eq!(fetched["net_income"], 10000);
    assert_eq!(fetched["final_balance"], 10000);
    assert_eq!(fetched["akhrajat"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn delete_with_unknown_mode_is_unprocessable() {
    let app = test_router().await;
    seed_geography(&app).await;

    let response = app
        .clone()
        .oneshot(request("POST", "/transactions", Some(transaction_body())))
        .await
        .expect("response");
    let id = json_body(response).await["id"].as_i64().expect("id");

    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/transactions/{id}?mode=everything"),
            None,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_single_leaves_tombstone() {
    let app = test_router().await;
    seed_geography(&app).await;

    let response = app
        .clone()
        .oneshot(request("POST", "/transactions", Some(transaction_body())))
        .await
        .expect("response");
    let id = json_body(response).await["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/transactions/{id}?mode=single"),
            None,
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = json_body(response).await;
    assert_eq!(deleted["deleted_ids"], json!([id]));

    let response = app
        .oneshot(request("GET", "/sync/tombstones", None))
        .await
        .expect("response");
    let tombstones = json_body(response).await;
    assert_eq!(tombstones[0]["transaction_id"], id);
    assert_eq!(tombstones[0]["deleted_by"], OPERATOR);
}

#[tokio::test]
async fn mark_synced_clears_pending_queue() {
    let app = test_router().await;
    seed_geography(&app).await;

    let response = app
        .clone()
        .oneshot(request("POST", "/transactions", Some(transaction_body())))
        .await
        .expect("response");
    let id = json_body(response).await["id"].as_i64().expect("id");

    let response = app
        .clone()
        .oneshot(request("GET", "/sync/pending", None))
        .await
        .expect("response");
    let pending = json_body(response).await;
    assert_eq!(pending.as_array().map(Vec::len), Some(1));

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/sync/mark-synced",
            Some(json!({ "ids": [id] })),
        ))
        .await
        .expect("response");
    let affected = json_body(response).await;
    assert_eq!(affected["affected"], 1);

    let response = app
        .oneshot(request("GET", "/sync/pending", None))
        .await
        .expect("response");
    let pending = json_body(response).await;
    assert_eq!(pending.as_array().map(Vec::len), Some(0));
}
