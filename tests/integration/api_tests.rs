//! API integration tests
//!
//! Need a running server with a migrated database.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000/api/v1";

fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

/// Register a fresh account and return its token and user id
async fn register(client: &Client) -> (String, i64) {
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "name": "Integration Tech",
            "email": format!("{}@gearguard.test", unique("tech")),
            "password": "secret123",
            "role": "technician"
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse register response");
    let token = body["token"].as_str().expect("No token in response").to_string();
    let user_id = body["user"]["id"].as_i64().expect("No user id");
    (token, user_id)
}

async fn post(client: &Client, token: &str, path: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED, "POST {}", path);
    response.json().await.expect("Failed to parse response")
}

async fn get(client: &Client, token: &str, path: &str) -> Value {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success(), "GET {}", path);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_then_login() {
    let client = Client::new();
    let email = format!("{}@gearguard.test", unique("login"));

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "name": "Login Test", "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "name": "Login Test", "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["role"], "user");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": "nobody@gearguard.test", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn test_request_takes_equipment_default_team() {
    let client = Client::new();
    let (token, user_id) = register(&client).await;

    let team = post(&client, &token, "/teams", json!({ "name": unique("Mechanics"), "member_ids": [user_id] })).await;
    let team_id = team["id"].as_i64().unwrap();

    let equipment = post(
        &client,
        &token,
        "/equipment",
        json!({ "name": "CNC Machine 01", "default_team_id": team_id }),
    )
    .await;
    let equipment_id = equipment["id"].as_i64().unwrap();

    let request = post(
        &client,
        &token,
        "/requests",
        json!({ "subject": "Spindle noise", "type": "Corrective", "equipment_id": equipment_id }),
    )
    .await;
    assert_eq!(request["team_id"].as_i64(), Some(team_id));
    assert_eq!(request["status"], "New");
    assert_eq!(request["priority"], "Medium");
    assert_eq!(request["requester_id"].as_i64(), Some(user_id));

    // An explicit team wins over the default
    let other = post(&client, &token, "/teams", json!({ "name": unique("Electricians") })).await;
    let request = post(
        &client,
        &token,
        "/requests",
        json!({
            "subject": "Wiring check",
            "type": "Preventive",
            "equipment_id": equipment_id,
            "team_id": other["id"]
        }),
    )
    .await;
    assert_eq!(request["team_id"], other["id"]);

    let team = get(&client, &token, &format!("/teams/{}", team_id)).await;
    assert_eq!(team["members"][0]["id"].as_i64(), Some(user_id));
}

#[tokio::test]
#[ignore]
async fn test_scrap_status_scraps_equipment() {
    let client = Client::new();
    let (token, _) = register(&client).await;

    let equipment = post(&client, &token, "/equipment", json!({ "name": "Forklift 3" })).await;
    let equipment_id = equipment["id"].as_i64().unwrap();
    assert_eq!(equipment["is_scrapped"], false);

    let request = post(
        &client,
        &token,
        "/requests",
        json!({ "subject": "Frame cracked", "type": "Corrective", "equipment_id": equipment_id }),
    )
    .await;
    let request_id = request["id"].as_i64().unwrap();

    let details = get(&client, &token, &format!("/equipment/{}", equipment_id)).await;
    assert_eq!(details["open_requests_count"], 1);

    let response = client
        .patch(format!("{}/requests/{}/status", BASE_URL, request_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "Scrap" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let details = get(&client, &token, &format!("/equipment/{}", equipment_id)).await;
    assert_eq!(details["is_scrapped"], true);

    // Leaving Scrap does not un-scrap the equipment
    let response = client
        .patch(format!("{}/requests/{}/status", BASE_URL, request_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "Repaired" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let details = get(&client, &token, &format!("/equipment/{}", equipment_id)).await;
    assert_eq!(details["is_scrapped"], true);
    assert_eq!(details["open_requests_count"], 0);

    let history = get(&client, &token, &format!("/equipment/{}/requests", equipment_id)).await;
    assert_eq!(history.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore]
async fn test_patch_unknown_request_is_not_found() {
    let client = Client::new();
    let (token, _) = register(&client).await;

    let response = client
        .patch(format!("{}/requests/{}/status", BASE_URL, i32::MAX))
        .bearer_auth(&token)
        .json(&json!({ "status": "In Progress" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_equipment_department_filter() {
    let client = Client::new();
    let (token, _) = register(&client).await;
    let department = unique("Assembly");

    post(&client, &token, "/equipment", json!({ "name": "Press A", "department": department })).await;
    post(&client, &token, "/equipment", json!({ "name": "Press B", "department": department })).await;
    post(&client, &token, "/equipment", json!({ "name": "Lathe", "department": "Elsewhere" })).await;

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .bearer_auth(&token)
        .query(&[("department", department.as_str())])
        .send()
        .await
        .expect("Failed to send request");
    let list: Value = response.json().await.expect("Failed to parse response");
    let list = list.as_array().unwrap();

    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|e| e["department"] == department.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_requests_per_team_report() {
    let client = Client::new();
    let (token, _) = register(&client).await;

    let team = post(&client, &token, "/teams", json!({ "name": unique("Hydraulics") })).await;
    for subject in ["Pump leak", "Valve stuck"] {
        post(
            &client,
            &token,
            "/requests",
            json!({ "subject": subject, "type": "Corrective", "team_id": team["id"] }),
        )
        .await;
    }

    let report = get(&client, &token, "/reports/requests-per-team").await;
    let row = report
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["id"] == team["id"])
        .expect("team missing from report");
    assert_eq!(row["request_count"], 2);

    let by_status = get(&client, &token, "/reports/requests-by-status").await;
    assert!(by_status.as_array().unwrap().iter().any(|row| row["status"] == "New"));
}

#[tokio::test]
#[ignore]
async fn test_dashboard_shape() {
    let client = Client::new();
    let (token, _) = register(&client).await;

    let dashboard = get(&client, &token, "/dashboard").await;
    assert!(dashboard["overdue_tasks"].is_i64());
    assert!(dashboard["upcoming_tasks"].is_i64());
    assert!(dashboard["open_requests"].is_i64());
    assert!(dashboard["recent_tasks"].as_array().unwrap().len() <= 10);
}
