//! Journal DTOs - dati per creare suggerimenti e revisioni

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateMealSuggestionDTO {
    #[validate(length(min = 1, max = 2000, message = "Suggestion must be between 1 and 2000 characters"))]
    pub suggestion: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePerformanceReviewDTO {
    #[validate(length(min = 1, max = 2000, message = "Key success must be between 1 and 2000 characters"))]
    pub key_success: String,

    #[validate(length(min = 1, max = 2000, message = "Improvement area must be between 1 and 2000 characters"))]
    pub improvement_area: String,

    #[validate(length(min = 1, max = 2000, message = "Journal prompt must be between 1 and 2000 characters"))]
    pub journal_prompt: String,
}
