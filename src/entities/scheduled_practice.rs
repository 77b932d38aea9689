//! ScheduledPractice entity - Pratica pianificata

use super::timestamps::Timestamps;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ScheduledPractice {
    pub practice_id: i64,
    pub name: String,
    pub tradition_id: Option<i64>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub timestamps: Timestamps,
}
