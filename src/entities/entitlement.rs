//! Entitlement entity - Diritto di accesso a un programma

use super::enums::EntitlementStatus;
use super::timestamps::Timestamps;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Entitlement {
    pub entitlement_id: i64,
    pub email: String,
    pub program_template_id: String,
    // codice di riscatto, univoco quando presente
    pub code: Option<String>,
    pub status: EntitlementStatus,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}
