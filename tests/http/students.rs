use serde_json::{json, Value};

use crate::support::start_server;

#[tokio::test]
async fn walkthrough_create_get_update_delete() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    // Create
    let resp = client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "A1", "name": "Ann" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let ann: Value = resp.json().await.unwrap();
    assert_eq!(ann["id"], 1);
    assert_eq!(ann["roll"], "A1");
    assert_eq!(ann["name"], "Ann");
    assert_eq!(ann["email"], "");
    assert_eq!(ann["department"], "");
    assert_eq!(ann["year"], 1);
    assert!(ann["created_at"].is_string());

    // Duplicate under normalization
    let resp = client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "a1 ", "name": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "student exists" }));

    // Get
    let resp = client.get(server.url("/api/students/A1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, ann);

    // Partial update
    let resp = client
        .put(server.url("/api/students/A1"))
        .json(&json!({ "department": "CS" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["department"], "CS");
    assert_eq!(updated["name"], "Ann");
    assert_eq!(updated["created_at"], ann["created_at"]);

    // Delete
    let resp = client.delete(server.url("/api/students/A1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "deleted": "A1" }));

    // Gone
    let resp = client.get(server.url("/api/students/A1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "not found" }));
}

#[tokio::test]
async fn list_returns_all_in_order() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/api/students")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));

    for (roll, name) in [("B2", "Bea"), ("A1", "Ann")] {
        let resp = client
            .post(server.url("/api/students"))
            .json(&json!({ "roll": roll, "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let body: Vec<Value> = client
        .get(server.url("/api/students"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rolls: Vec<&str> = body.iter().map(|s| s["roll"].as_str().unwrap()).collect();
    assert_eq!(rolls, ["B2", "A1"]);
}

#[tokio::test]
async fn recreated_roll_gets_fresh_id() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    for roll in ["A1", "B2"] {
        client
            .post(server.url("/api/students"))
            .json(&json!({ "roll": roll, "name": "n" }))
            .send()
            .await
            .unwrap();
    }
    let resp = client.delete(server.url("/api/students/a1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "A1", "name": "again" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn update_with_bad_year_keeps_old_value() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "A1", "name": "Ann", "year": 2 }))
        .send()
        .await
        .unwrap();

    let resp = client
        .put(server.url("/api/students/A1"))
        .json(&json!({ "year": "sophomore", "email": "ann@x.io" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["year"], 2);
    assert_eq!(body["email"], "ann@x.io");
}

#[tokio::test]
async fn roll_in_path_is_percent_decoded() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "CS 101", "name": "Spacey" }))
        .send()
        .await
        .unwrap();

    let resp = client
        .get(server.url("/api/students/cs%20101"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Spacey");
}

#[tokio::test]
async fn writes_reach_the_data_file() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    client
        .post(server.url("/api/students"))
        .json(&json!({ "roll": "A1", "name": "Ann" }))
        .send()
        .await
        .unwrap();

    let text = std::fs::read_to_string(&server.data_file).unwrap();
    let stored: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(stored[0]["roll"], "A1");
    assert_eq!(stored.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn cors_headers_are_present() {
    let server = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(server.url("/api/students"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
