//! UserRole entity - Ruolo in un dominio

use super::timestamps::Timestamps;
use serde::{Deserialize, Serialize};

/// A role string paired with a domain string. Nothing ties the two together.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRole {
    pub role_id: i64,
    pub role: String,
    pub domain: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}
