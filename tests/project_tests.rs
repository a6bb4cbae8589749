
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;
use uuid::Uuid;

#[actix_rt::test]
async fn root_returns_plain_text_greeting() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Hello World!");
}

#[actix_rt::test]
async fn create_project_returns_201_with_id() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/api/projects", &sample_project()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Project created successfully");
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[actix_rt::test]
async fn created_project_is_listed_with_timestamp() {
    let app = TestApp::spawn().await;
    let before = Utc::now();

    let id = app.create("/api/projects", &sample_project()).await;
    let projects = app.list("/api/projects").await;

    assert_eq!(projects.len(), 1);
    let project = &projects[0];
    assert_eq!(project["_id"], id);
    assert_eq!(project["title"], "A");
    assert_eq!(project["category"], "Frontend");
    assert_eq!(project["live"], "https://a.example.com");

    let created_at: DateTime<Utc> = project["createdAt"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before);
}

#[actix_rt::test]
async fn each_create_gets_a_fresh_identifier() {
    let app = TestApp::spawn().await;

    let first = app.create("/api/projects", &sample_project()).await;
    let second = app.create("/api/projects", &sample_project()).await;

    assert_ne!(first, second);
    assert_eq!(app.list("/api/projects").await.len(), 2);
}

#[actix_rt::test]
async fn create_project_with_unknown_category_is_rejected() {
    let app = TestApp::spawn().await;
    let mut payload = sample_project();
    payload["category"] = json!("Mobile");

    let response = app.post_json("/api/projects", &payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(app.list("/api/projects").await.is_empty());
}

#[actix_rt::test]
async fn malformed_json_body_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/api/projects"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_rt::test]
async fn update_with_empty_payload_is_bad_request_and_changes_nothing() {
    let app = TestApp::spawn().await;
    let id = app.create("/api/projects", &sample_project()).await;
    let before = app.list("/api/projects").await;

    let response = app.patch_json(&format!("/api/projects/{id}"), &json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.list("/api/projects").await, before);
}

#[actix_rt::test]
async fn update_project_merges_supplied_fields() {
    let app = TestApp::spawn().await;
    let id = app.create("/api/projects", &sample_project()).await;

    let response = app
        .patch_json(&format!("/api/projects/{id}"), &json!({"category": "Full Stack"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Project updated successfully");

    let project = &app.list("/api/projects").await[0];
    assert_eq!(project["category"], "Full Stack");
    assert_eq!(project["title"], "A");
    assert_eq!(project["description"], "First project");
}

#[actix_rt::test]
async fn update_unknown_project_is_not_found() {
    let app = TestApp::spawn().await;
    app.create("/api/projects", &sample_project()).await;

    let response = app
        .patch_json(&format!("/api/projects/{}", Uuid::new_v4()), &json!({"title": "B"}))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.list("/api/projects").await.len(), 1);
}

#[actix_rt::test]
async fn update_without_any_change_is_not_found() {
    let app = TestApp::spawn().await;
    let id = app.create("/api/projects", &sample_project()).await;

    let response = app.patch_json(&format!("/api/projects/{id}"), &json!({"title": "A"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Project not found or no changes");
}

#[actix_rt::test]
async fn update_with_malformed_id_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.patch_json("/api/projects/not-an-id", &json!({"title": "B"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid id");
}

#[actix_rt::test]
async fn delete_project_twice_returns_200_then_404() {
    let app = TestApp::spawn().await;
    let id = app.create("/api/projects", &sample_project()).await;

    let first = app.delete(&format!("/api/projects/{id}")).await;
    assert_eq!(first.status(), StatusCode::OK);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "message": "Project deleted successfully"}));

    let second = app.delete(&format!("/api/projects/{id}")).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert!(app.list("/api/projects").await.is_empty());
}

#[actix_rt::test]
async fn delete_with_malformed_id_is_bad_request_without_side_effects() {
    let app = TestApp::spawn().await;
    app.create("/api/projects", &sample_project()).await;

    let response = app.delete("/api/projects/12345").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "message": "Invalid id"}));
    assert_eq!(app.list("/api/projects").await.len(), 1);
}

#[actix_rt::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::spawn().await;
    app.create("/api/projects/", &sample_project()).await;

    assert_eq!(app.list("/api/projects/").await.len(), 1);
}

#[actix_rt::test]
async fn health_reports_storage_status() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
