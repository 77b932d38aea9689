//! Journal entities - Suggerimenti pasto e revisioni delle prestazioni

use super::timestamps::Timestamps;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MealSuggestion {
    pub suggestion_id: i64,
    pub suggestion: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PerformanceReview {
    pub review_id: i64,
    pub key_success: String,
    pub improvement_area: String,
    pub journal_prompt: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}
