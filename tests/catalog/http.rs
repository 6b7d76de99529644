//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use catalog_admin::microsvc;
use serde_json::{json, Value};

use crate::support::catalog;

/// Bind to port 0 and return the base URL.
async fn start_server() -> String {
    let app = microsvc::router(Arc::new(catalog()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    let commands = body["commands"].as_array().unwrap();
    assert!(commands.iter().any(|c| c == "category.create"));
    assert!(commands.iter().any(|c| c == "cast_member.list"));
}

#[tokio::test]
async fn category_lifecycle() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/categories"))
        .json(&json!({ "name": "Movies", "description": "Most watched" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let location = resp.headers()["location"].to_str().unwrap().to_string();
    let body: Value = resp.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(location, format!("/categories/{id}"));

    let resp = client.get(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let category: Value = resp.json().await.unwrap();
    assert_eq!(category["name"], "Movies");

    let resp = client
        .put(format!("{base}/categories/{id}"))
        .json(&json!({ "name": "Films", "is_active": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": id }));

    let resp = client.delete(format!("{base}/categories/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client.get(format!("{base}/categories/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": format!("Category with ID {id} was not found"),
            "errors": [{ "message": format!("Category with ID {id} was not found") }]
        })
    );
}

#[tokio::test]
async fn validation_errors_are_422() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/cast_members"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "'name' should not be null");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/genres"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn list_uses_query_parameters() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    for name in ["Action", "Drama", "Comedy"] {
        let resp = client
            .post(format!("{base}/genres"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let resp = client
        .get(format!("{base}/genres?page=0&perPage=2&sort=name&dir=desc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["total"], 3);
    assert_eq!(page["per_page"], 2);
    let names: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Drama", "Comedy"]);

    let resp = client
        .get(format!("{base}/genres?search=dra"))
        .send()
        .await
        .unwrap();
    let page: Value = resp.json().await.unwrap();
    assert_eq!(page["total"], 1);
}

#[tokio::test]
async fn unknown_resource_is_404() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/videos")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "unknown command: videos");
}
