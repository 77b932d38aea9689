//! Journal schema: query and mutation roots plus the axum handlers

use crate::core::JournalState;
use crate::dtos::{CreateMealSuggestionDTO, CreatePerformanceReviewDTO, ListQuery};
use crate::graphql::types::{MealSuggestion, PerformanceReview};
use crate::repositories::{Create, List, Read};
use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, FieldResult, Object, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html, response::IntoResponse};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

pub type JournalSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn create_schema(state: Arc<JournalState>) -> JournalSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(state)
        .finish()
}

fn db_error(e: sqlx::Error) -> async_graphql::Error {
    tracing::error!("Database error: {}", e);
    async_graphql::Error::new(format!("Database error: {e}"))
}

fn page(limit: Option<i64>) -> (i64, i64) {
    ListQuery {
        limit,
        offset: None,
    }
    .bounds()
}

pub struct Query;

#[Object]
impl Query {
    /// Most recent meal suggestions first
    async fn meal_suggestions(
        &self,
        ctx: &Context<'_>,
        limit: Option<i64>,
    ) -> FieldResult<Vec<MealSuggestion>> {
        let state = ctx.data::<Arc<JournalState>>()?;
        let (limit, offset) = page(limit);
        let rows = state.meal.list(limit, offset).await.map_err(db_error)?;
        Ok(rows.into_iter().map(MealSuggestion::from).collect())
    }

    /// Most recent reviews first
    async fn performance_reviews(
        &self,
        ctx: &Context<'_>,
        limit: Option<i64>,
    ) -> FieldResult<Vec<PerformanceReview>> {
        let state = ctx.data::<Arc<JournalState>>()?;
        let (limit, offset) = page(limit);
        let rows = state.review.list(limit, offset).await.map_err(db_error)?;
        Ok(rows.into_iter().map(PerformanceReview::from).collect())
    }

    async fn performance_review(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> FieldResult<Option<PerformanceReview>> {
        let state = ctx.data::<Arc<JournalState>>()?;
        let row = state.review.read(&id).await.map_err(db_error)?;
        Ok(row.map(PerformanceReview::from))
    }
}

pub struct Mutation;

#[Object(rename_args = "snake_case")]
impl Mutation {
    async fn suggest_meal(
        &self,
        ctx: &Context<'_>,
        suggestion: String,
    ) -> FieldResult<MealSuggestion> {
        let state = ctx.data::<Arc<JournalState>>()?;
        let dto = CreateMealSuggestionDTO { suggestion };
        dto.validate()
            .map_err(|e| async_graphql::Error::new(format!("Validation error: {e}")))?;

        let row = state.meal.create(&dto).await.map_err(db_error)?;
        info!("Meal suggestion {} recorded", row.suggestion_id);
        Ok(row.into())
    }

    async fn record_performance_review(
        &self,
        ctx: &Context<'_>,
        key_success: String,
        improvement_area: String,
        journal_prompt: String,
    ) -> FieldResult<PerformanceReview> {
        let state = ctx.data::<Arc<JournalState>>()?;
        let dto = CreatePerformanceReviewDTO {
            key_success,
            improvement_area,
            journal_prompt,
        };
        dto.validate()
            .map_err(|e| async_graphql::Error::new(format!("Validation error: {e}")))?;

        let row = state.review.create(&dto).await.map_err(db_error)?;
        info!("Performance review {} recorded", row.review_id);
        Ok(row.into())
    }
}

/// POST /graphql
#[instrument(skip_all)]
pub async fn graphql_handler(
    Extension(schema): Extension<JournalSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GET /graphql
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
