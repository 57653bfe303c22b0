use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::validation::parse_id;
use super::{ApiError, AppState, CreateUserRequest, DeleteUserQuery, UserDto};
use crate::models::Role;
use crate::services::NewUser;

fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::validation(format!("{} is required", field)))
}

/// `POST /api/principal/createUser`
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let roles = payload
        .roles
        .ok_or_else(|| ApiError::validation("roles is required"))?
        .iter()
        .map(|name| name.parse::<Role>())
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let new_user = NewUser {
        username: required("username", payload.username)?,
        email: required("email", payload.email)?,
        password: required("password", payload.password)?,
        roles,
    };

    let user = state.users().create_user(new_user).await?;
    tracing::info!(username = %user.username, "User created");

    Ok(Json(user.into()))
}

/// `DELETE /api/principal/deleteUser?id=`
///
/// Missing users are not an error.
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeleteUserQuery>,
) -> Result<String, ApiError> {
    let raw = query
        .id
        .ok_or_else(|| ApiError::validation("id is required"))?;
    let id = parse_id(&raw)?;

    state.users().delete_user(id).await?;

    Ok(format!("Se ha borrado el usuario con id{}", id))
}
