//! End-to-end HTTP tests: a real server on an ephemeral port driven through
//! the typed client, plus raw requests for malformed input.

mod common;

use common::{count_rows, payload, spawn_server};
use jobboard_core::dto::job::ListJobs;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let server = spawn_server().await;
    server.client.health().await.unwrap();
}

#[tokio::test]
async fn test_create_update_delete_scenario() {
    let server = spawn_server().await;
    let client = &server.client;

    let created = client.create_job(&payload("Engineer", "Acme")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.company.name, "Acme");

    let mut req = payload("Engineer", "Acme Corp");
    req.job_type = "Contract".to_string();
    let updated = client.update_job(created.id, &req).await.unwrap();
    assert_eq!(updated.job_type, "Contract");

    let fetched = client.get_job(created.id).await.unwrap();
    assert_eq!(fetched.company.name, "Acme Corp");

    let ack = client.delete_job(created.id).await.unwrap();
    assert_eq!(ack.detail, "Job deleted successfully");

    let err = client.get_job(created.id).await.unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(count_rows(&server.db.pool, "companies").await, 1);
}

#[tokio::test]
async fn test_list_over_http() {
    let server = spawn_server().await;
    let client = &server.client;

    for title in ["First", "Second", "Third"] {
        client.create_job(&payload(title, "Acme")).await.unwrap();
    }

    let all = client.list_jobs(ListJobs::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|job| job.company.name == "Acme"));

    let page = client.list_jobs(ListJobs { skip: 2, limit: 5 }).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title, "Third");

    let empty = client.list_jobs(ListJobs { skip: 3, limit: 5 }).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_missing_job_returns_404_detail() {
    let server = spawn_server().await;
    let client = &server.client;

    let err = client.get_job(77).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "API error (status 404): Job 77 not found");

    assert!(client
        .update_job(77, &payload("Engineer", "Acme"))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(client.delete_job(77).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_blank_field_is_rejected() {
    let server = spawn_server().await;

    let mut req = payload("Engineer", "Acme");
    req.company.name = "".to_string();

    let err = server.client.create_job(&req).await.unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(count_rows(&server.db.pool, "companies").await, 0);
}

#[tokio::test]
async fn test_missing_company_is_rejected() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{}/jobs", server.base_url))
        .json(&json!({
            "title": "Engineer",
            "type": "Full-time",
            "description": "Build systems",
            "location": "Remote",
            "salary": "100000"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_bad_path_and_query_are_rejected() {
    let server = spawn_server().await;
    let http = reqwest::Client::new();

    let response = http
        .get(format!("{}/jobs/not-a-number", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);

    let response = http
        .get(format!("{}/jobs?skip=-1", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);

    let response = http
        .get(format!("{}/jobs?limit=0", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 422);
}
