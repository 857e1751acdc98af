use serde_json::{json, Value};

use crate::support::{start_server, start_server_with_file};

#[tokio::test]
async fn create_without_name_is_400() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "A1", "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "roll and name required" }));
}

#[tokio::test]
async fn create_with_empty_body_is_400() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.post(server.url("/api/students")).send().await.unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "roll and name required");
}

#[tokio::test]
async fn malformed_body_is_400_with_error_field() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/students"))
        .header("content-type", "application/json")
        .body("{ roll: ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_and_delete_unknown_are_404() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(server.url("/api/students/ghost"))
        .json(&json!({ "name": "Boo" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(server.url("/api/students/ghost"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "not found" }));
}

#[tokio::test]
async fn corrupt_data_file_is_recovered() {
    let server = start_server_with_file("[{ this is not json").await;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/api/students")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    let mut backup = server.data_file.clone().into_os_string();
    backup.push(".bak");
    assert_eq!(
        std::fs::read_to_string(&backup).unwrap(),
        "[{ this is not json"
    );

    let resp = client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "A1", "name": "Ann" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
}
