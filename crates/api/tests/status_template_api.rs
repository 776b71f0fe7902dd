//! HTTP-level integration tests for status templates.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn template_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "Flujo editorial",
        "states": [
            {"name": "Borrador", "color": "bg-slate-500", "order": 0, "isDefault": true},
            {"name": "Revisión", "color": "bg-amber-500", "order": 1},
            {"name": "Publicado", "color": "bg-green-500", "order": 2}
        ]
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_template(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/status-templates",
        template_body("Editorial"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["name"], "Editorial");
    assert_eq!(created["data"]["states"].as_array().unwrap().len(), 3);
    assert_eq!(created["data"]["states"][0]["isDefault"], true);

    let response = get(build_test_app(pool), &format!("/api/v1/status-templates/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["states"], created["data"]["states"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_templates(pool: PgPool) {
    post_json(build_test_app(pool.clone()), "/api/v1/status-templates", template_body("B")).await;
    post_json(build_test_app(pool.clone()), "/api/v1/status-templates", template_body("A")).await;

    let json = body_json(get(build_test_app(pool), "/api/v1/status-templates").await).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn template_without_states_is_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/status-templates",
        json!({"name": "Vacía", "states": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn colliding_state_names_are_reported_not_fixed(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/status-templates",
        json!({
            "name": "Colisión",
            "states": [
                {"name": "To Do", "color": "c1", "order": 0},
                {"name": "Hecho", "color": "c2", "order": 1},
                {"name": "TO DO", "color": "c3", "order": 2}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(
        created["data"]["status_id_collisions"],
        json!([{"status_id": "TO_DO", "names": ["To Do", "TO DO"]}])
    );
    assert_eq!(created["data"]["states"].as_array().unwrap().len(), 3);

    let template_id = created["data"]["id"].as_i64().unwrap();
    let project = body_json(
        post_json(
            build_test_app(pool),
            "/api/v1/projects",
            json!({"name": "Duplicados", "template_id": template_id}),
        )
        .await,
    )
    .await;
    let ids: Vec<&str> = project["data"]["config"]["statuses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["TO_DO", "HECHO", "TO_DO"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn template_without_collisions_reports_none(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/status-templates",
        template_body("  Editorial  "),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["data"]["name"], "Editorial");
    assert_eq!(created["data"]["status_id_collisions"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_template_name_returns_409(pool: PgPool) {
    post_json(
        build_test_app(pool.clone()),
        "/api/v1/status-templates",
        template_body("Única"),
    )
    .await;
    let response = post_json(
        build_test_app(pool),
        "/api/v1/status-templates",
        template_body("Única"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_template_keeps_derived_project_config(pool: PgPool) {
    let created = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/status-templates",
            template_body("Efímera"),
        )
        .await,
    )
    .await;
    let template_id = created["data"]["id"].as_i64().unwrap();

    let project = body_json(
        post_json(
            build_test_app(pool.clone()),
            "/api/v1/projects",
            json!({"name": "Revista", "template_id": template_id}),
        )
        .await,
    )
    .await;
    let project_id = project["data"]["project"]["id"].as_i64().unwrap();

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/status-templates/{template_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let config = body_json(
        get(build_test_app(pool), &format!("/api/v1/projects/{project_id}/config")).await,
    )
    .await;
    assert_eq!(config["data"]["statuses"][0]["id"], "BORRADOR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_template_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/status-templates/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
