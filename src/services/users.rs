//! Users services - Gestione entitlement e ruoli

use crate::core::{AppError, UsersState};
use crate::dtos::{
    AutoEnrollRequest, CreateUserRoleDTO, EntitlementDTO, EntitlementQuery, ListQuery,
    RedeemRequest, UserRoleDTO,
};
use crate::entities::EntitlementStatus;
use crate::repositories::{Create, Delete, List};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(email = %body.email, count = body.entitlements.len()))]
pub async fn auto_enroll(
    State(state): State<Arc<UsersState>>,
    Json(body): Json<AutoEnrollRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Auto-enroll request received");
    // 1. Validare email e ogni entitlement annidato
    // 2. Salvare tutti gli entitlement in un'unica transazione, nell'ordine ricevuto
    // 3. Ritornare gli entitlement creati nello stesso ordine
    body.validate()?;

    let created = state.entitlement.create_many(&body.entitlements).await?;
    info!("Enrolled {} entitlements", created.len());

    let dtos = created
        .into_iter()
        .map(EntitlementDTO::from)
        .collect::<Vec<_>>();
    Ok((StatusCode::CREATED, Json(dtos)))
}

#[instrument(skip(state, body), fields(code = %body.code))]
pub async fn redeem_entitlement(
    State(state): State<Arc<UsersState>>,
    Json(body): Json<RedeemRequest>,
) -> Result<Json<EntitlementDTO>, AppError> {
    debug!("Redeem request received");
    // 1. Cercare l'entitlement tramite codice (404 se non esiste)
    // 2. Deve essere ancora "issued" (409 altrimenti)
    // 3. Il program template e l'eventuale codice nel payload devono coincidere (400)
    // 4. Passare a "redeemed" assegnando l'email di chi riscatta
    body.validate()?;

    let stored = state
        .entitlement
        .find_by_code(&body.code)
        .await?
        .ok_or_else(|| {
            warn!("Entitlement code not found");
            AppError::not_found("Entitlement not found")
        })?;

    if stored.status != EntitlementStatus::Issued {
        warn!("Entitlement is {}, cannot redeem", stored.status);
        return Err(AppError::conflict("Entitlement cannot be redeemed")
            .with_details(format!("status is {}", stored.status)));
    }

    if stored.program_template_id != body.entitlement.program_template_id {
        warn!("Program template mismatch");
        return Err(AppError::bad_request("Program template does not match"));
    }

    if let Some(code) = body.entitlement.code.as_deref() {
        if code != body.code {
            warn!("Entitlement code does not match request code");
            return Err(AppError::bad_request("Entitlement code does not match"));
        }
    }

    // la transizione è condizionata allo stato: se un'altra richiesta ha
    // riscattato nel frattempo non troviamo più la riga in "issued"
    let redeemed = state
        .entitlement
        .transition_status(
            stored.entitlement_id,
            EntitlementStatus::Issued,
            EntitlementStatus::Redeemed,
            Some(&body.entitlement.email),
        )
        .await?
        .ok_or_else(|| AppError::conflict("Entitlement cannot be redeemed"))?;

    info!("Entitlement {} redeemed", redeemed.entitlement_id);
    Ok(Json(EntitlementDTO::from(redeemed)))
}

#[instrument(skip(state), fields(email = %params.email))]
pub async fn list_entitlements(
    State(state): State<Arc<UsersState>>,
    Query(params): Query<EntitlementQuery>, // query params /entitlements?email=...
) -> Result<Json<Vec<EntitlementDTO>>, AppError> {
    let entitlements = state.entitlement.find_by_email(&params.email).await?;
    info!("Found {} entitlements", entitlements.len());
    Ok(Json(
        entitlements.into_iter().map(EntitlementDTO::from).collect(),
    ))
}

#[instrument(skip(state))]
pub async fn list_roles(
    State(state): State<Arc<UsersState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<UserRoleDTO>>, AppError> {
    let (limit, offset) = params.bounds();
    let roles = state.role.list(limit, offset).await?;
    debug!("Returning {} roles", roles.len());
    Ok(Json(roles.into_iter().map(UserRoleDTO::from).collect()))
}

#[instrument(skip(state, body), fields(role = %body.role, domain = %body.domain))]
pub async fn create_role(
    State(state): State<Arc<UsersState>>,
    Json(body): Json<CreateUserRoleDTO>,
) -> Result<impl IntoResponse, AppError> {
    body.validate()?;
    let role = state.role.create(&body).await?;
    info!("Role {} created", role.role_id);
    Ok((StatusCode::CREATED, Json(UserRoleDTO::from(role))))
}

#[instrument(skip(state), fields(role_id = %role_id))]
pub async fn delete_role(
    State(state): State<Arc<UsersState>>,
    Path(role_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.role.delete(&role_id).await? {
        warn!("Role not found");
        return Err(AppError::not_found("Role not found"));
    }
    info!("Role deleted");
    Ok(StatusCode::NO_CONTENT)
}

