//! Scheduled practice services - CRUD sulle pratiche pianificate

use crate::core::{AppError, PracticesState};
use crate::dtos::{
    CreateScheduledPracticeDTO, ListQuery, ScheduledPracticeDTO, UpdateScheduledPracticeDTO,
};
use crate::repositories::{Create, Delete, List, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_practices(
    State(state): State<Arc<PracticesState>>,
    Query(params): Query<ListQuery>, // /scheduled-practices?limit=..&offset=..
) -> Result<Json<Vec<ScheduledPracticeDTO>>, AppError> {
    let (limit, offset) = params.bounds();
    let practices = state.practice.list(limit, offset).await?;
    debug!("Returning {} scheduled practices", practices.len());
    Ok(Json(
        practices.into_iter().map(ScheduledPracticeDTO::from).collect(),
    ))
}

#[instrument(skip(state), fields(practice_id = %practice_id))]
pub async fn get_practice(
    State(state): State<Arc<PracticesState>>,
    Path(practice_id): Path<i64>,
) -> Result<Json<ScheduledPracticeDTO>, AppError> {
    let practice = state.practice.read(&practice_id).await?.ok_or_else(|| {
        warn!("Scheduled practice not found");
        AppError::not_found("Scheduled practice not found")
    })?;
    Ok(Json(ScheduledPracticeDTO::from(practice)))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_practice(
    State(state): State<Arc<PracticesState>>,
    Json(body): Json<CreateScheduledPracticeDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let practice = state.practice.create(&body).await?;
    info!("Scheduled practice {} created", practice.practice_id);
    Ok((StatusCode::CREATED, Json(ScheduledPracticeDTO::from(practice))))
}

#[instrument(skip(state, body), fields(practice_id = %practice_id))]
pub async fn update_practice(
    State(state): State<Arc<PracticesState>>,
    Path(practice_id): Path<i64>,
    Json(body): Json<UpdateScheduledPracticeDTO>,
) -> Result<Json<ScheduledPracticeDTO>, AppError> {
    // Solo i campi presenti vengono scritti, modified_at viene sempre aggiornato
    body.validate()?;
    let practice = state.practice.update(&practice_id, &body).await?;
    Ok(Json(ScheduledPracticeDTO::from(practice)))
}

#[instrument(skip(state), fields(practice_id = %practice_id))]
pub async fn delete_practice(
    State(state): State<Arc<PracticesState>>,
    Path(practice_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.practice.delete(&practice_id).await? {
        warn!("Scheduled practice not found");
        return Err(AppError::not_found("Scheduled practice not found"));
    }
    info!("Scheduled practice deleted");
    Ok(StatusCode::NO_CONTENT)
}
