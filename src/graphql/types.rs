//! GraphQL object types

use crate::entities;
use async_graphql::SimpleObject;

#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(rename_fields = "snake_case")]
pub struct MealSuggestion {
    pub suggestion_id: i64,
    pub suggestion: String,
}

impl From<entities::MealSuggestion> for MealSuggestion {
    fn from(value: entities::MealSuggestion) -> Self {
        Self {
            suggestion_id: value.suggestion_id,
            suggestion: value.suggestion,
        }
    }
}

/// End-of-day review: what went well, what to improve, what to write about
#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(rename_fields = "snake_case")]
pub struct PerformanceReview {
    pub review_id: i64,
    pub key_success: String,
    pub improvement_area: String,
    pub journal_prompt: String,
}

impl From<entities::PerformanceReview> for PerformanceReview {
    fn from(value: entities::PerformanceReview) -> Self {
        Self {
            review_id: value.review_id,
            key_success: value.key_success,
            improvement_area: value.improvement_area,
            journal_prompt: value.journal_prompt,
        }
    }
}
