//! ScheduledPractice DTOs

use crate::entities::{ScheduledPractice, Timestamps};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateScheduledPracticeDTO {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    #[serde(default)]
    pub tradition_id: Option<i64>,

    pub scheduled_at: DateTime<Utc>,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: i32,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

/// DTO per aggiornare una pratica (solo i campi `Some` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateScheduledPracticeDTO {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: Option<String>,

    pub tradition_id: Option<i64>,

    pub scheduled_at: Option<DateTime<Utc>>,

    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: Option<i32>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

impl UpdateScheduledPracticeDTO {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tradition_id.is_none()
            && self.scheduled_at.is_none()
            && self.duration_minutes.is_none()
            && self.notes.is_none()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduledPracticeDTO {
    pub practice_id: i64,
    pub name: String,
    pub tradition_id: Option<i64>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<ScheduledPractice> for ScheduledPracticeDTO {
    fn from(value: ScheduledPractice) -> Self {
        Self {
            practice_id: value.practice_id,
            name: value.name,
            tradition_id: value.tradition_id,
            scheduled_at: value.scheduled_at,
            duration_minutes: value.duration_minutes,
            notes: value.notes,
            timestamps: value.timestamps,
        }
    }
}
