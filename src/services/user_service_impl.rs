//! `SeaORM` implementation of the `UserService` trait.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::SqlErr;

use crate::config::SecurityConfig;
use crate::db::{Repository, Store, sql_error};
use crate::models::User;
use crate::services::password::{hash_password_blocking, verify_password_blocking};
use crate::services::user_service::{NewUser, UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
    security: Arc<SecurityConfig>,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store, security: Arc<SecurityConfig>) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn create_user(&self, user: NewUser) -> Result<User, UserError> {
        let username = user.username.trim();
        if username.is_empty() {
            return Err(UserError::Validation("username must not be blank".to_string()));
        }
        if user.email.trim().is_empty() {
            return Err(UserError::Validation("email must not be blank".to_string()));
        }
        if user.password.is_empty() {
            return Err(UserError::Validation("password must not be empty".to_string()));
        }

        let repo = self.store.user_repo();
        if repo.find_by_username(username).await?.is_some() {
            return Err(UserError::UsernameTaken(username.to_string()));
        }

        let password_hash = hash_password_blocking(&user.password, &self.security).await?;
        let new = User::new(username, user.email.trim(), password_hash, user.roles);

        repo.save(new).await.map_err(|err| match sql_error(&err) {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                UserError::UsernameTaken(username.to_string())
            }
            _ => UserError::from(err),
        })
    }

    async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        self.store.user_repo().delete_by_id(id).await?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self.store.user_repo().find_by_username(username).await?)
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, UserError> {
        let Some(user) = self.store.user_repo().find_by_username(username).await? else {
            return Ok(None);
        };

        if verify_password_blocking(password, &user.password_hash).await? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
