//! End-to-end smoke tests for the full parkhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use parkhub_adapter_http_axum::router;
use parkhub_adapter_http_axum::state::AppState;
use parkhub_adapter_storage_sqlite_sqlx::{Config, SqliteSlotRepository};
use parkhub_app::ports::SlotRepository;
use parkhub_app::services::seed_service::SeedService;
use parkhub_app::services::slot_service::SlotService;
use parkhub_domain::slot::Slot;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database,
/// plus a repository handle on the same database for direct inspection.
async fn app() -> (axum::Router, SqliteSlotRepository) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        SeedService::new(SqliteSlotRepository::new(pool.clone())),
        SlotService::new(SqliteSlotRepository::new(pool.clone())),
    );

    (router::build(state), SqliteSlotRepository::new(pool))
}

fn seed_request(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/admin/init-sample-data{query}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn pre_existing(count: usize) -> Vec<Slot> {
    (1..=count)
        .map(|i| {
            Slot::builder()
                .slot_number(format!("P{i}"))
                .city("Pune")
                .build()
                .unwrap()
        })
        .collect()
}

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app().await;
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_seed_empty_database() {
    let (app, repo) = app().await;

    let resp = app.oneshot(seed_request("")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Successfully initialized parking slots!");
    assert_eq!(body["totalSlots"], 85);
    assert_eq!(
        body["cities"],
        serde_json::json!(["Hyderabad", "Bangalore", "Mumbai"])
    );
    assert_eq!(body["locations"], 8);
    assert_eq!(repo.count().await.unwrap(), 85);
}

#[tokio::test]
async fn should_leave_existing_slots_untouched_without_force() {
    let (app, repo) = app().await;
    repo.save_all(pre_existing(5)).await.unwrap();

    let resp = app.oneshot(seed_request("?force=false")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["existingCount"], 5);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("already has 5 slots")
    );
    let slots = repo.get_all().await.unwrap();
    assert_eq!(slots.len(), 5);
    assert!(slots.iter().all(|s| s.city == "Pune"));
}

#[tokio::test]
async fn should_replace_existing_slots_with_force() {
    let (app, repo) = app().await;
    repo.save_all(pre_existing(5)).await.unwrap();

    let resp = app.oneshot(seed_request("?force=true")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["totalSlots"], 85);
    assert_eq!(repo.count().await.unwrap(), 85);
    assert!(repo.find_by_city("Pune").await.unwrap().is_empty());
}

#[tokio::test]
async fn should_not_duplicate_when_seeding_twice() {
    let (app, repo) = app().await;

    let first = app.clone().oneshot(seed_request("")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.oneshot(seed_request("")).await.unwrap();
    assert_eq!(body_json(second).await["existingCount"], 85);
    assert_eq!(repo.count().await.unwrap(), 85);
}

#[tokio::test]
async fn should_list_and_fetch_seeded_slots() {
    let (app, _) = app().await;
    app.clone().oneshot(seed_request("")).await.unwrap();

    // List one city
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/slots?city=Bangalore")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let slots = body.as_array().unwrap();
    assert_eq!(slots.len(), 22);
    assert_eq!(slots[0]["slotNumber"], "E1");
    assert_eq!(slots[0]["area"], "Koramangala");
    assert_eq!(slots[0]["isAvailable"], true);
    let id = slots[0]["id"].as_str().unwrap().to_string();

    // Fetch one
    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/slots/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["slotNumber"], "E1");
    assert_eq!(body["section"], "General");
    assert_eq!(body["location"]["x"], 150.0);
    assert_eq!(body["location"]["y"], 250.0);
}
