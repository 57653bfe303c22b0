use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};

use super::{ApiError, AppState};
use crate::models::{Role, User};

/// Roles allowed to read makers and products.
pub const READ_ROLES: &[Role] = &[Role::User, Role::Admin, Role::Invited];

/// Roles allowed to create, change or delete makers and products.
pub const WRITE_ROLES: &[Role] = &[Role::Admin];

/// The authenticated caller of a request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub username: String,
    pub roles: BTreeSet<Role>,
}

impl Principal {
    /// # Errors
    ///
    /// Returns [`ApiError::Forbidden`] unless the caller holds one of `allowed`.
    pub fn require_any(&self, allowed: &[Role]) -> Result<(), ApiError> {
        if allowed.iter().any(|role| self.roles.contains(role)) {
            Ok(())
        } else {
            Err(ApiError::forbidden(format!(
                "User '{}' lacks the required role",
                self.username
            )))
        }
    }
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            roles: user.roles,
        }
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// Resolves HTTP Basic credentials against the user table and stores the
/// resulting [`Principal`] in the request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (username, password) = basic_credentials(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    let user = state
        .users()
        .authenticate(&username, &password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    tracing::Span::current().record("user_id", user.username.as_str());
    request.extensions_mut().insert(Principal::from(user));

    Ok(next.run(request).await)
}

/// Extract `username:password` from an `Authorization: Basic` header
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value
        .strip_prefix("Basic ")
        .or_else(|| value.strip_prefix("basic "))?;

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}
