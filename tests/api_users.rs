//! Integration tests per gli endpoints del servizio users
//!
//! Test per:
//! - POST /entitlements/auto-enroll
//! - POST /entitlements/redeem
//! - GET /entitlements?email=...
//! - GET/POST /roles, DELETE /roles/{role_id}

mod common;

#[cfg(test)]
mod users_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    async fn enroll(server: &TestServer, entitlements: Value) -> Vec<Value> {
        let response = server
            .post("/entitlements/auto-enroll")
            .json(&json!({ "email": "ada@example.com", "entitlements": entitlements }))
            .await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    fn issued(code: &str) -> Value {
        json!({
            "status": "issued",
            "email": "ada@example.com",
            "program_template_id": "breathwork-101",
            "code": code
        })
    }

    #[tokio::test]
    async fn test_root_health() {
        let server = users_server().await;
        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_text("Server is running!");
    }

    // ============================================================
    // Test per POST /entitlements/auto-enroll
    // ============================================================

    #[tokio::test]
    async fn test_auto_enroll_preserves_order() {
        let server = users_server().await;
        let created = enroll(
            &server,
            json!([
                issued("ZZZ"),
                {"status": "revoked", "email": "ada@example.com", "program_template_id": "yoga-1"},
                issued("AAA")
            ]),
        )
        .await;

        assert_eq!(created.len(), 3);
        assert_eq!(created[0]["code"], "ZZZ");
        assert!(created[1]["code"].is_null());
        assert_eq!(created[1]["status"], "revoked");
        assert_eq!(created[2]["code"], "AAA");
        for item in &created {
            assert!(item.get("created_at").is_some());
            assert!(item.get("modified_at").is_some());
        }

        let response = server
            .get("/entitlements")
            .add_query_param("email", "ada@example.com")
            .await;
        response.assert_status_ok();
        let listed: Vec<Value> = response.json();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_auto_enroll_rejects_unknown_status() {
        let server = users_server().await;
        let response = server
            .post("/entitlements/auto-enroll")
            .json(&json!({
                "email": "ada@example.com",
                "entitlements": [{
                    "status": "pending",
                    "email": "ada@example.com",
                    "program_template_id": "breathwork-101"
                }]
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_auto_enroll_rejects_invalid_nested_email() {
        let server = users_server().await;
        let response = server
            .post("/entitlements/auto-enroll")
            .json(&json!({
                "email": "ada@example.com",
                "entitlements": [{
                    "status": "issued",
                    "email": "not-an-email",
                    "program_template_id": "breathwork-101"
                }]
            }))
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation error");
    }

    #[tokio::test]
    async fn test_auto_enroll_duplicate_code_is_conflict() {
        let server = users_server().await;
        let response = server
            .post("/entitlements/auto-enroll")
            .json(&json!({ "email": "ada@example.com", "entitlements": [issued("DUP"), issued("DUP")] }))
            .await;
        response.assert_status(StatusCode::CONFLICT);

        let listed: Vec<Value> = server
            .get("/entitlements")
            .add_query_param("email", "ada@example.com")
            .await
            .json();
        assert!(listed.is_empty());
    }

    // ============================================================
    // Test per POST /entitlements/redeem
    // ============================================================

    fn redeem_body(code: &str, program: &str, item_code: Option<&str>) -> Value {
        let mut entitlement = json!({
            "status": "issued",
            "email": "grace@example.com",
            "program_template_id": program
        });
        if let Some(item_code) = item_code {
            entitlement["code"] = json!(item_code);
        }
        json!({ "code": code, "entitlement": entitlement })
    }

    #[tokio::test]
    async fn test_redeem_success() {
        let server = users_server().await;
        enroll(&server, json!([issued("GIFT-1")])).await;

        let response = server
            .post("/entitlements/redeem")
            .json(&redeem_body("GIFT-1", "breathwork-101", Some("GIFT-1")))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "redeemed");
        assert_eq!(body["email"], "grace@example.com");
        assert_eq!(body["code"], "GIFT-1");

        // una volta riscattato non si può riscattare di nuovo
        let response = server
            .post("/entitlements/redeem")
            .json(&redeem_body("GIFT-1", "breathwork-101", None))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_redeem_unknown_code() {
        let server = users_server().await;
        let response = server
            .post("/entitlements/redeem")
            .json(&redeem_body("NOPE", "breathwork-101", None))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_redeem_revoked_is_conflict() {
        let server = users_server().await;
        enroll(
            &server,
            json!([{
                "status": "revoked",
                "email": "ada@example.com",
                "program_template_id": "breathwork-101",
                "code": "OLD"
            }]),
        )
        .await;

        let response = server
            .post("/entitlements/redeem")
            .json(&redeem_body("OLD", "breathwork-101", None))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_redeem_program_mismatch() {
        let server = users_server().await;
        enroll(&server, json!([issued("GIFT-2")])).await;

        let response = server
            .post("/entitlements/redeem")
            .json(&redeem_body("GIFT-2", "yoga-1", None))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_redeem_code_mismatch() {
        let server = users_server().await;
        enroll(&server, json!([issued("GIFT-3")])).await;

        let response = server
            .post("/entitlements/redeem")
            .json(&redeem_body("GIFT-3", "breathwork-101", Some("OTHER")))
            .await;
        response.assert_status_bad_request();

        // lo stato non è cambiato
        let listed: Vec<Value> = server
            .get("/entitlements")
            .add_query_param("email", "ada@example.com")
            .await
            .json();
        assert_eq!(listed[0]["status"], "issued");
    }

    // ============================================================
    // Test per /roles
    // ============================================================

    #[tokio::test]
    async fn test_roles_lifecycle() {
        let server = users_server().await;

        let response = server
            .post("/roles")
            .json(&json!({ "role": "coach", "domain": "breathwork" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let role: Value = response.json();
        let role_id = role["role_id"].as_i64().unwrap();

        let roles: Vec<Value> = server.get("/roles").await.json();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0]["domain"], "breathwork");

        server
            .delete(&format!("/roles/{role_id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete(&format!("/roles/{role_id}"))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_create_role_requires_domain() {
        let server = users_server().await;
        let response = server
            .post("/roles")
            .json(&json!({ "role": "coach", "domain": "" }))
            .await;
        response.assert_status_bad_request();
    }
}
