//! Entitlement DTOs - richieste di iscrizione automatica e riscatto

use crate::entities::{Entitlement, EntitlementStatus, Timestamps};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One entitlement as sent by the client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct EntitlementItem {
    pub status: EntitlementStatus,

    #[validate(email(message = "Entitlement email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Program template id must be between 1 and 255 characters"))]
    pub program_template_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 64, message = "Code must be between 1 and 64 characters"))]
    pub code: Option<String>,
}

/// Enroll an email into every listed entitlement, in order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct AutoEnrollRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(nested)]
    pub entitlements: Vec<EntitlementItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
pub struct RedeemRequest {
    #[validate(length(min = 1, max = 64, message = "Code must be between 1 and 64 characters"))]
    pub code: String,

    #[validate(nested)]
    pub entitlement: EntitlementItem,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntitlementDTO {
    pub entitlement_id: i64,
    pub email: String,
    pub program_template_id: String,
    pub code: Option<String>,
    pub status: EntitlementStatus,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<Entitlement> for EntitlementDTO {
    fn from(value: Entitlement) -> Self {
        Self {
            entitlement_id: value.entitlement_id,
            email: value.email,
            program_template_id: value.program_template_id,
            code: value.code,
            status: value.status,
            timestamps: value.timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(status: &str, code: Option<&str>) -> serde_json::Value {
        let mut value = json!({
            "status": status,
            "email": "ada@example.com",
            "program_template_id": "breathwork-101",
        });
        if let Some(code) = code {
            value["code"] = json!(code);
        }
        value
    }

    #[test]
    fn test_item_with_unknown_status_fails() {
        let result = serde_json::from_value::<EntitlementItem>(item("pending", None));
        assert!(result.is_err());
    }

    #[test]
    fn test_item_code_is_optional() {
        let parsed: EntitlementItem = serde_json::from_value(item("issued", None)).unwrap();
        assert_eq!(parsed.code, None);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_auto_enroll_request_round_trip_preserves_items() {
        let body = json!({
            "email": "ada@example.com",
            "entitlements": [
                item("issued", Some("AAA-1")),
                item("revoked", None),
                item("redeemed", Some("CCC-3")),
            ]
        });

        let parsed: AutoEnrollRequest = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(parsed.entitlements.len(), 3);
        assert_eq!(parsed.entitlements[0].code.as_deref(), Some("AAA-1"));
        assert_eq!(parsed.entitlements[1].status, EntitlementStatus::Revoked);
        assert_eq!(parsed.entitlements[2].status, EntitlementStatus::Redeemed);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back, body);
        let reparsed: AutoEnrollRequest = serde_json::from_value(back).unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_nested_items_are_validated() {
        let mut bad = item("issued", None);
        bad["email"] = json!("not-an-email");
        let request: AutoEnrollRequest = serde_json::from_value(json!({
            "email": "ada@example.com",
            "entitlements": [item("issued", None), bad]
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_redeem_request_requires_code() {
        let request: RedeemRequest = serde_json::from_value(json!({
            "code": "",
            "entitlement": item("issued", None)
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
