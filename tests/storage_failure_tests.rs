
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use portfolio_api::{
    entities::{
        blog::Blog,
        message::Message,
        project::{NewProject, Project, ProjectPatch},
    },
    errors::AppError,
    repositories::{collection::DocumentCollection, memory::MemoryCollection},
    AppState,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;
use uuid::Uuid;

mock! {
    pub ProjectStore {}

    #[async_trait]
    impl DocumentCollection<Project> for ProjectStore {
        async fn insert_one(&self, doc: &NewProject, created_at: DateTime<Utc>) -> Result<Uuid, AppError>;
        async fn find_all(&self) -> Result<Vec<Project>, AppError>;
        async fn update_one(&self, id: &Uuid, patch: &ProjectPatch, now: DateTime<Utc>) -> Result<u64, AppError>;
        async fn delete_one(&self, id: &Uuid) -> Result<u64, AppError>;
        async fn ping(&self) -> Result<(), AppError>;
    }
}

async fn spawn_with_projects(store: MockProjectStore) -> TestApp {
    let state = AppState::from_collections(
        Arc::new(store),
        Arc::new(MemoryCollection::<Blog>::new()),
        Arc::new(MemoryCollection::<Message>::new()),
    );
    TestApp::spawn_with(state).await
}

/// Health polling during startup goes through `ping`.
fn healthy_store() -> MockProjectStore {
    let mut store = MockProjectStore::new();
    store.expect_ping().returning(|| Ok(()));
    store
}

#[actix_rt::test]
async fn list_failure_is_500_without_leaking_details() {
    let mut store = healthy_store();
    store
        .expect_find_all()
        .returning(|| Err(AppError::InternalError("connection refused (os error 111)".into())));
    let app = spawn_with_projects(store).await;

    let response = app.get("/api/projects").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Internal server error"}));
}

#[actix_rt::test]
async fn rejected_insert_is_400_with_failure_message() {
    let mut store = healthy_store();
    store
        .expect_insert_one()
        .times(1)
        .returning(|_, _| Err(AppError::Rejected("new row violates check constraint".into())));
    let app = spawn_with_projects(store).await;

    let response = app.post_json("/api/projects", &sample_project()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Failed to create project"}));
}

#[actix_rt::test]
async fn unexpected_insert_error_is_500() {
    let mut store = healthy_store();
    store
        .expect_insert_one()
        .returning(|_, _| Err(AppError::InternalError("pool timed out".into())));
    let app = spawn_with_projects(store).await;

    let response = app.post_json("/api/projects", &sample_project()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn insert_receives_payload_and_fresh_timestamp() {
    let before = Utc::now();
    let id = Uuid::new_v4();
    let mut store = healthy_store();
    store
        .expect_insert_one()
        .withf(move |doc, created_at| doc.title == "A" && *created_at >= before)
        .times(1)
        .returning(move |_, _| Ok(id));
    let app = spawn_with_projects(store).await;

    let response = app.post_json("/api/projects", &sample_project()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], id.to_string());
}

#[actix_rt::test]
async fn empty_update_never_reaches_storage() {
    let mut store = healthy_store();
    store.expect_update_one().never();
    let app = spawn_with_projects(store).await;

    let response = app.patch_json(&format!("/api/projects/{}", Uuid::new_v4()), &json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn update_failure_is_500() {
    let mut store = healthy_store();
    store
        .expect_update_one()
        .returning(|_, _, _| Err(AppError::InternalError("deadlock detected".into())));
    let app = spawn_with_projects(store).await;

    let response = app
        .patch_json(&format!("/api/projects/{}", Uuid::new_v4()), &json!({"title": "B"}))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn refused_update_is_500_without_storage_text() {
    let mut store = healthy_store();
    store
        .expect_update_one()
        .times(1)
        .returning(|_, _, _| Err(AppError::Rejected("invalid byte sequence for encoding \"UTF8\": 0x00".into())));
    let app = spawn_with_projects(store).await;

    let response = app
        .patch_json(&format!("/api/projects/{}", Uuid::new_v4()), &json!({"title": "x\u{0}y"}))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Internal server error"}));
}

#[actix_rt::test]
async fn refused_list_and_delete_are_500() {
    let mut store = healthy_store();
    store
        .expect_find_all()
        .returning(|| Err(AppError::Rejected("value out of range".into())));
    store
        .expect_delete_one()
        .returning(|_| Err(AppError::Rejected("foreign key violation".into())));
    let app = spawn_with_projects(store).await;

    let list = app.get("/api/projects").await;
    assert_eq!(list.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = list.json().await.unwrap();
    assert_eq!(body["message"], "Internal server error");

    let delete = app.delete(&format!("/api/projects/{}", Uuid::new_v4())).await;
    assert_eq!(delete.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = delete.json().await.unwrap();
    assert_eq!(body["message"], "Internal server error");
}

#[actix_rt::test]
async fn malformed_delete_id_never_reaches_storage() {
    let mut store = healthy_store();
    store.expect_delete_one().never();
    let app = spawn_with_projects(store).await;

    let response = app.delete("/api/projects/zzz").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn delete_failure_is_500() {
    let mut store = healthy_store();
    store
        .expect_delete_one()
        .returning(|_| Err(AppError::InternalError("connection reset".into())));
    let app = spawn_with_projects(store).await;

    let response = app.delete(&format!("/api/projects/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_rt::test]
async fn health_reports_unavailable_storage() {
    let mut store = MockProjectStore::new();
    store
        .expect_ping()
        .returning(|| Err(AppError::InternalError("no route to host".into())));
    let app = spawn_with_projects(store).await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["database"], "Unavailable");
}
