//! Integration tests for scene state: materials, transforms, groups,
//! environment.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json, seed_model};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn materials_replace_all(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    let response = post_json(
        app.clone(),
        "/api/materials",
        json!({
            "model_id": model_id,
            "materials": [
                {
                    "object_name": "seat",
                    "preset": "wood",
                    "base_color": "#8b5a2b",
                    "metalness": 0.0,
                    "roughness": 0.8,
                    "opacity": 1.0
                },
                {
                    "object_name": "frame",
                    "base_color": "#222222",
                    "metalness": 0.9,
                    "roughness": 0.3,
                    "opacity": 1.0,
                    "extras": {"clearcoat": 0.5}
                }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    // Resynced set comes back ordered by object name.
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["object_name"], "frame");
    // Omitted preset defaults to "custom".
    assert_eq!(data[0]["preset"], "custom");
    assert_eq!(data[0]["extras"]["clearcoat"], 0.5);
    assert_eq!(data[1]["preset"], "wood");

    let listed = body_json(
        get(app, &format!("/api/materials?model_id={model_id}")).await,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_preset_creates_a_record(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    let response = post_json(
        app.clone(),
        "/api/materials/preset",
        json!({"model_id": model_id, "object_name": "seat", "preset": "metal"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["object_name"], "seat");
    assert_eq!(body["data"]["preset"], "metal");
    assert_eq!(body["data"]["metalness"], 1.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_preset_keeps_custom_extras(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    // Seed the object with a material carrying a viewer-specific extra.
    post_json(
        app.clone(),
        "/api/materials",
        json!({
            "model_id": model_id,
            "materials": [{
                "object_name": "seat",
                "base_color": "#ffffff",
                "metalness": 0.0,
                "roughness": 0.5,
                "opacity": 1.0,
                "extras": {"viewer_tag": "hero"}
            }]
        }),
    )
    .await;

    let body = body_json(
        post_json(
            app.clone(),
            "/api/materials/preset",
            json!({"model_id": model_id, "object_name": "seat", "preset": "glass"}),
        )
        .await,
    )
    .await;

    // Preset parameters win, but extras the preset does not define survive.
    assert_eq!(body["data"]["preset"], "glass");
    assert_eq!(body["data"]["extras"]["viewer_tag"], "hero");
    assert_eq!(body["data"]["extras"]["ior"], 1.5);

    // Upsert, not insert: still one record for the object.
    let listed = body_json(
        get(app, &format!("/api/materials?model_id={model_id}")).await,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_unknown_preset_is_400(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    let response = post_json(
        app,
        "/api/materials/preset",
        json!({"model_id": model_id, "object_name": "seat", "preset": "vibranium"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn transforms_replace_all_with_defaults(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    let response = post_json(
        app.clone(),
        "/api/transforms",
        json!({
            "model_id": model_id,
            "transforms": [
                {"object_name": "seat"},
                {
                    "object_name": "frame",
                    "position_y": 0.1,
                    "scale_x": 2.0,
                    "scale_y": 2.0,
                    "scale_z": 2.0,
                    "visible": false
                }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Resynced set comes back ordered by object name: frame, then seat.
    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["object_name"], "frame");
    assert_eq!(data[0]["position_y"], 0.1);
    assert_eq!(data[0]["visible"], false);
    // Omitted fields get identity defaults.
    assert_eq!(data[1]["scale_x"], 1.0);
    assert_eq!(data[1]["visible"], true);
    assert_eq!(data[1]["deleted"], false);

    let listed = body_json(
        get(app, &format!("/api/transforms?model_id={model_id}")).await,
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn groups_replace_all(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    let response = post_json(
        app.clone(),
        "/api/groups",
        json!({
            "model_id": model_id,
            "groups": [
                {"name": "legs", "object_names": ["leg_fl", "leg_fr", "leg_bl", "leg_br"]},
                {"name": "hidden", "object_names": [], "visible": false}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Resynced set comes back ordered by group name: hidden, then legs.
    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "hidden");
    assert_eq!(data[0]["visible"], false);
    assert_eq!(data[1]["object_names"].as_array().unwrap().len(), 4);

    // A second save replaces, never appends.
    post_json(
        app.clone(),
        "/api/groups",
        json!({
            "model_id": model_id,
            "groups": [{"name": "all", "object_names": ["seat"]}]
        }),
    )
    .await;
    let listed = body_json(
        get(app, &format!("/api/groups?model_id={model_id}")).await,
    )
    .await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "all");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn environment_upsert_round_trip(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool.clone());
    let model_id = seed_model(&pool, "chair").await;

    // No saved environment yet: null, not 404.
    let response = get(app.clone(), &format!("/api/environment?model_id={model_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.is_null());

    let response = put_json(
        app.clone(),
        "/api/environment",
        json!({
            "model_id": model_id,
            "settings": {"background": "#202020", "fog_enabled": true}
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let first_id = body["data"]["id"].as_i64().unwrap();

    // A second PUT updates the same row.
    let body = body_json(
        put_json(
            app.clone(),
            "/api/environment",
            json!({"model_id": model_id, "settings": {"background": "#ffffff"}}),
        )
        .await,
    )
    .await;
    assert_eq!(body["data"]["id"].as_i64().unwrap(), first_id);
    assert_eq!(body["data"]["settings"]["background"], "#ffffff");

    let env = body_json(
        get(app, &format!("/api/environment?model_id={model_id}")).await,
    )
    .await;
    assert_eq!(env["settings"]["background"], "#ffffff");
    assert!(env["settings"].get("fog_enabled").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn scene_saves_require_existing_model(pool: PgPool) {
    let (app, _store) = common::build_test_app(pool);

    for (uri, body) in [
        ("/api/materials", json!({"model_id": 1, "materials": []})),
        ("/api/transforms", json!({"model_id": 1, "transforms": []})),
        ("/api/groups", json!({"model_id": 1, "groups": []})),
    ] {
        let response = post_json(app.clone(), uri, body).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let response = put_json(
        app,
        "/api/environment",
        json!({"model_id": 1, "settings": {}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
