//! Tradition entity - Tradizione a cui appartengono le pratiche

use super::timestamps::Timestamps;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Tradition {
    pub tradition_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}
