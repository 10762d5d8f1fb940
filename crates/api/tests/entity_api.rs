//! HTTP-level integration tests for the master-data endpoints.
//!
//! Uses tower::ServiceExt to send requests directly to the router without
//! an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Guest CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_guest_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/guests",
        serde_json::json!({"full_name": "Awa Ndiaye", "country": "Senegal"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["full_name"], "Awa Ndiaye");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_guest_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/guests",
            serde_json::json!({"full_name": "Get Me"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/guests/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["full_name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_guest_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/guests/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_guest(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/guests",
            serde_json::json!({"full_name": "Original"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/guests/{id}"),
        serde_json::json!({"title": "Hon.", "dietary_notes": "no peanuts"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["full_name"], "Original");
    assert_eq!(json["title"], "Hon.");
    assert_eq!(json["dietary_notes"], "no peanuts");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_guest_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/guests",
            serde_json::json!({"full_name": "Short Stay"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/guests/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/guests/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_guests_uses_data_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/guests",
        serde_json::json!({"full_name": "Listed Guest"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/guests").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].is_array());
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Room CRUD and constraint mapping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_room_number_returns_409(pool: PgPool) {
    let body = serde_json::json!({"room_number": "101", "floor": 1, "capacity": 2});

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/rooms", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/rooms", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_escort_officer_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/escort-officers",
            serde_json::json!({"full_name": "Capt. Asante", "rank": "Captain"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["rank"], "Captain");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/escort-officers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
