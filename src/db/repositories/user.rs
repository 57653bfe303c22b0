use std::collections::BTreeSet;

use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::Repository;
use crate::entities::{prelude::*, roles, user_roles, users};
use crate::models::{Role, User};

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by username, roles included
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        match user {
            Some(user) => self.with_roles(user).await.map(Some),
            None => Ok(None),
        }
    }

    async fn with_roles(&self, user: users::Model) -> Result<User> {
        let roles = user
            .find_related(Roles)
            .all(&self.conn)
            .await
            .context("Failed to load roles for user")?;

        user_from_model(user, roles)
    }

    /// Replaces the role links of `user_id` with `roles`.
    async fn link_roles(
        txn: &DatabaseTransaction,
        user_id: i64,
        roles: &BTreeSet<Role>,
    ) -> Result<()> {
        UserRoles::delete_many()
            .filter(user_roles::Column::UserId.eq(user_id))
            .exec(txn)
            .await
            .context("Failed to clear user roles")?;

        if roles.is_empty() {
            return Ok(());
        }

        let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
        let rows = Roles::find()
            .filter(roles::Column::Name.is_in(names))
            .all(txn)
            .await
            .context("Failed to resolve roles")?;

        if rows.len() != roles.len() {
            anyhow::bail!("Role table is missing one of: {roles:?}");
        }

        let links: Vec<user_roles::ActiveModel> = rows
            .into_iter()
            .map(|role| user_roles::ActiveModel {
                user_id: Set(user_id),
                role_id: Set(role.id),
            })
            .collect();

        UserRoles::insert_many(links)
            .exec_without_returning(txn)
            .await
            .context("Failed to link user roles")?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl Repository<User, i64> for UserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        match user {
            Some(user) => self.with_roles(user).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = Users::find()
            .find_with_related(Roles)
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        rows.into_iter()
            .map(|(user, roles)| user_from_model(user, roles))
            .collect()
    }

    /// Writes the user row and its role links in one transaction.
    async fn save(&self, user: User) -> Result<User> {
        let txn = self.conn.begin().await?;

        let row = match user.id {
            None => users::ActiveModel {
                username: Set(user.username),
                email: Set(user.email),
                password_hash: Set(user.password_hash),
                created_at: Set(user.created_at),
                updated_at: Set(user.updated_at),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .context("Failed to insert user")?,
            Some(id) => users::ActiveModel {
                id: Set(id),
                username: Set(user.username),
                email: Set(user.email),
                password_hash: Set(user.password_hash),
                created_at: Set(user.created_at),
                updated_at: Set(chrono::Utc::now().to_rfc3339()),
            }
            .update(&txn)
            .await
            .with_context(|| format!("Failed to update user {id}"))?,
        };

        Self::link_roles(&txn, row.id, &user.roles).await?;
        txn.commit().await?;

        Ok(User {
            id: Some(row.id),
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            roles: user.roles,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    /// Missing ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let txn = self.conn.begin().await?;

        UserRoles::delete_many()
            .filter(user_roles::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .context("Failed to delete user roles")?;

        Users::delete_by_id(id)
            .exec(&txn)
            .await
            .context("Failed to delete user")?;

        txn.commit().await?;
        Ok(())
    }
}

fn user_from_model(user: users::Model, roles: Vec<roles::Model>) -> Result<User> {
    let roles = roles
        .into_iter()
        .map(|r| r.name.parse::<Role>())
        .collect::<Result<BTreeSet<_>, _>>()
        .with_context(|| format!("User {} has an unrecognised role", user.username))?;

    Ok(User {
        id: Some(user.id),
        username: user.username,
        email: user.email,
        password_hash: user.password_hash,
        roles,
        created_at: user.created_at,
        updated_at: user.updated_at,
    })
}
