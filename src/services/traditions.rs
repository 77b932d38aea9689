//! Tradition services - catalogo delle tradizioni

use crate::core::{AppError, PracticesState, TraceOptions, trace_call};
use crate::dtos::{CreateTraditionDTO, ListQuery, TraditionDTO};
use crate::entities::Tradition;
use crate::repositories::{Create, List, Read, TraditionRepository};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Thin layer over [`TraditionRepository`]; every call is wrapped in a
/// `trace_call` span named after the operation.
pub struct TraditionService {
    repository: TraditionRepository,
}

impl TraditionService {
    pub fn new(repository: TraditionRepository) -> Self {
        Self { repository }
    }

    /// Returns the repository page as is; errors propagate unchanged.
    pub async fn list_traditions(&self, limit: i64, offset: i64) -> Result<Vec<Tradition>, sqlx::Error> {
        let options = TraceOptions::new("list_traditions")
            .attribute("limit", limit.to_string())
            .attribute("offset", offset.to_string());
        trace_call(&options, self.repository.list(limit, offset)).await
    }

    pub async fn create_tradition(&self, data: &CreateTraditionDTO) -> Result<Tradition, sqlx::Error> {
        let options = TraceOptions::new("create_tradition").attribute("name", data.name.as_str());
        trace_call(&options, self.repository.create(data)).await
    }

    pub async fn get_tradition(&self, id: i64) -> Result<Option<Tradition>, sqlx::Error> {
        let options = TraceOptions::new("get_tradition").attribute("tradition_id", id.to_string());
        trace_call(&options, self.repository.read(&id)).await
    }
}

#[instrument(skip(state))]
pub async fn list_traditions(
    State(state): State<Arc<PracticesState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<TraditionDTO>>, AppError> {
    let (limit, offset) = params.bounds();
    let traditions = state.traditions.list_traditions(limit, offset).await?;
    info!("Found {} traditions", traditions.len());
    Ok(Json(traditions.into_iter().map(TraditionDTO::from).collect()))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_tradition(
    State(state): State<Arc<PracticesState>>,
    Json(body): Json<CreateTraditionDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let tradition = state.traditions.create_tradition(&body).await?;
    Ok((StatusCode::CREATED, Json(TraditionDTO::from(tradition))))
}

#[instrument(skip(state), fields(tradition_id = %tradition_id))]
pub async fn get_tradition(
    State(state): State<Arc<PracticesState>>,
    Path(tradition_id): Path<i64>,
) -> Result<Json<TraditionDTO>, AppError> {
    let tradition = state
        .traditions
        .get_tradition(tradition_id)
        .await?
        .ok_or_else(|| {
            warn!("Tradition not found");
            AppError::not_found("Tradition not found")
        })?;
    Ok(Json(TraditionDTO::from(tradition)))
}
