//! Tradition DTOs

use crate::entities::{Timestamps, Tradition};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateTraditionDTO {
    #[validate(length(min = 1, max = 120, message = "Name must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TraditionDTO {
    pub tradition_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<Tradition> for TraditionDTO {
    fn from(value: Tradition) -> Self {
        Self {
            tradition_id: value.tradition_id,
            name: value.name,
            description: value.description,
            timestamps: value.timestamps,
        }
    }
}
