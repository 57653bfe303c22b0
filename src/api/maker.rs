use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use super::auth::{Principal, READ_ROLES, WRITE_ROLES};
use super::validation::{parse_id, validate_name};
use super::{ApiError, AppState, MakerDto, MakerRequest};
use crate::models::Maker;

/// `GET /api/maker/find/{id}`
pub async fn find_by_id(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<MakerDto>, ApiError> {
    principal.require_any(READ_ROLES)?;
    let id = parse_id(&id)?;

    let maker = state.makers().find_by_id(id).await?;
    Ok(Json(MakerDto::with_products(maker)))
}

/// `GET /api/maker/findAll`
pub async fn find_all(
    State(state): State<Arc<AppState>>,
    principal: Principal,
) -> Result<Json<Vec<MakerDto>>, ApiError> {
    principal.require_any(READ_ROLES)?;

    let makers = state.makers().find_all().await?;
    Ok(Json(makers.into_iter().map(MakerDto::summary).collect()))
}

/// `POST /api/maker/save`
///
/// Always creates a new maker; an `id` in the body is ignored.
pub async fn save(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    payload: Result<Json<MakerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    principal.require_any(WRITE_ROLES)?;
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    let name = validate_name(payload.name.as_deref())?;

    let maker = state.makers().save(Maker::new(name)).await?;
    let id = maker.id.unwrap_or_default();
    tracing::info!(maker_id = id, "Maker created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/maker/find/{id}"))],
        Json(MakerDto::with_products(maker)),
    ))
}

/// `PUT /api/maker/update/{id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<MakerRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    principal.require_any(WRITE_ROLES)?;
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    state.makers().find_by_id(id).await?;
    let name = validate_name(payload.name.as_deref())?;
    state.makers().rename(id, name).await?;

    Ok("Registro Actualizado")
}

/// `DELETE /api/maker/delete/{id}`
///
/// Deletes the maker's products along with it.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    principal.require_any(WRITE_ROLES)?;
    let id = parse_id(&id)?;

    state.makers().delete_by_id(id).await?;
    tracing::info!(maker_id = id, "Maker deleted");

    Ok("Registro Eliminado")
}
