//! Domain service for user provisioning and credential checks.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::{Role, User};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

/// Account details as submitted, with the password still in plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: BTreeSet<Role>,
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Hashes the password and stores the user with its roles.
    ///
    /// # Errors
    ///
    /// - Returns [`UserError::Validation`] if a field is blank
    /// - Returns [`UserError::UsernameTaken`] if the username exists
    async fn create_user(&self, user: NewUser) -> Result<User, UserError>;

    /// Deletes the user if present. Unknown ids are a no-op.
    async fn delete_user(&self, id: i64) -> Result<(), UserError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;

    /// The user owning these credentials, or `None` if they do not match.
    async fn authenticate(&self, username: &str, password: &str)
    -> Result<Option<User>, UserError>;
}
