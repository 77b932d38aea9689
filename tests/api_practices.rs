//! Integration tests per gli endpoints del servizio practices
//!
//! Test per:
//! - GET/POST /traditions, GET /traditions/{tradition_id}
//! - CRUD su /scheduled-practices

mod common;

#[cfg(test)]
mod practices_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{DateTime, Utc};
    use serde_json::{Value, json};
    use std::time::Duration;

    async fn create_tradition(server: &TestServer, name: &str) -> Value {
        let response = server
            .post("/traditions")
            .json(&json!({ "name": name, "description": "test tradition" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    async fn create_practice(server: &TestServer, body: Value) -> Value {
        let response = server.post("/scheduled-practices").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    fn timestamp(value: &Value) -> DateTime<Utc> {
        serde_json::from_value(value.clone()).unwrap()
    }

    // ============================================================
    // Test per /traditions
    // ============================================================

    #[tokio::test]
    async fn test_list_traditions_empty_then_filled() {
        let server = practices_server().await;
        let traditions: Vec<Value> = server.get("/traditions").await.json();
        assert!(traditions.is_empty());

        create_tradition(&server, "Zen").await;
        create_tradition(&server, "Vipassana").await;

        let response = server.get("/traditions").await;
        response.assert_status_ok();
        let traditions: Vec<Value> = response.json();
        let names: Vec<_> = traditions.iter().map(|t| t["name"].clone()).collect();
        assert_eq!(names, vec![json!("Zen"), json!("Vipassana")]);

        let page: Vec<Value> = server
            .get("/traditions")
            .add_query_param("limit", 1)
            .add_query_param("offset", 1)
            .await
            .json();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0]["name"], "Vipassana");
    }

    #[tokio::test]
    async fn test_duplicate_tradition_is_conflict() {
        let server = practices_server().await;
        create_tradition(&server, "Zen").await;
        let response = server
            .post("/traditions")
            .json(&json!({ "name": "Zen" }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_tradition() {
        let server = practices_server().await;
        let zen = create_tradition(&server, "Zen").await;
        let id = zen["tradition_id"].as_i64().unwrap();

        let response = server.get(&format!("/traditions/{id}")).await;
        response.assert_status_ok();
        let fetched: Value = response.json();
        assert_eq!(fetched, zen);

        server.get("/traditions/999").await.assert_status_not_found();
    }

    // ============================================================
    // Test per /scheduled-practices
    // ============================================================

    #[tokio::test]
    async fn test_practice_crud() {
        let server = practices_server().await;
        let zen = create_tradition(&server, "Zen").await;

        let created = create_practice(
            &server,
            json!({
                "name": "Morning zazen",
                "tradition_id": zen["tradition_id"],
                "scheduled_at": "2026-03-01T06:00:00Z",
                "duration_minutes": 30
            }),
        )
        .await;
        let id = created["practice_id"].as_i64().unwrap();
        assert_eq!(created["duration_minutes"], 30);
        assert!(created["notes"].is_null());

        let fetched: Value = server
            .get(&format!("/scheduled-practices/{id}"))
            .await
            .json();
        assert_eq!(fetched, created);

        let listed: Vec<Value> = server.get("/scheduled-practices").await.json();
        assert_eq!(listed.len(), 1);

        server
            .delete(&format!("/scheduled-practices/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/scheduled-practices/{id}"))
            .await
            .assert_status_not_found();
        server
            .delete(&format!("/scheduled-practices/{id}"))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_update_touches_modified_at_only() {
        let server = practices_server().await;
        let created = create_practice(
            &server,
            json!({
                "name": "Evening walk",
                "scheduled_at": "2026-03-01T18:00:00Z",
                "duration_minutes": 20
            }),
        )
        .await;
        let id = created["practice_id"].as_i64().unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        let response = server
            .patch(&format!("/scheduled-practices/{id}"))
            .json(&json!({ "notes": "bring a jacket" }))
            .await;
        response.assert_status_ok();
        let updated: Value = response.json();

        assert_eq!(updated["notes"], "bring a jacket");
        assert_eq!(updated["name"], "Evening walk");
        assert_eq!(updated["duration_minutes"], 20);
        assert_eq!(updated["created_at"], created["created_at"]);
        assert!(timestamp(&updated["modified_at"]) > timestamp(&created["modified_at"]));
    }

    #[tokio::test]
    async fn test_update_missing_practice() {
        let server = practices_server().await;
        server
            .patch("/scheduled-practices/42")
            .json(&json!({ "duration_minutes": 10 }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_practice_validation() {
        let server = practices_server().await;
        let response = server
            .post("/scheduled-practices")
            .json(&json!({
                "name": "Marathon sit",
                "scheduled_at": "2026-03-01T06:00:00Z",
                "duration_minutes": 0
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_practice_with_unknown_tradition() {
        let server = practices_server().await;
        let response = server
            .post("/scheduled-practices")
            .json(&json!({
                "name": "Orphan",
                "tradition_id": 12345,
                "scheduled_at": "2026-03-01T06:00:00Z",
                "duration_minutes": 15
            }))
            .await;
        response.assert_status_bad_request();
    }
}
