//! Enumerazioni - Tipi enumerati utilizzati nelle entità

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an entitlement. Stored and serialized in lowercase; any
/// other literal fails deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EntitlementStatus {
    Issued,
    Redeemed,
    Revoked,
}

impl fmt::Display for EntitlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = match self {
            EntitlementStatus::Issued => "issued",
            EntitlementStatus::Redeemed => "redeemed",
            EntitlementStatus::Revoked => "revoked",
        };
        f.write_str(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_the_three_literals() {
        for (literal, expected) in [
            ("\"issued\"", EntitlementStatus::Issued),
            ("\"redeemed\"", EntitlementStatus::Redeemed),
            ("\"revoked\"", EntitlementStatus::Revoked),
        ] {
            let status: EntitlementStatus = serde_json::from_str(literal).unwrap();
            assert_eq!(status, expected);
            assert_eq!(format!("\"{}\"", status), literal);
        }
    }

    #[test]
    fn test_status_rejects_anything_else() {
        assert!(serde_json::from_str::<EntitlementStatus>("\"expired\"").is_err());
        // il confronto è case sensitive
        assert!(serde_json::from_str::<EntitlementStatus>("\"Issued\"").is_err());
        assert!(serde_json::from_str::<EntitlementStatus>("\"\"").is_err());
    }
}
