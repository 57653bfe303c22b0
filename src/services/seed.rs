//! Default accounts provisioned at startup.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::info;

use crate::models::Role;
use crate::services::{NewUser, UserService};

const DEFAULT_PASSWORD: &str = "1234";

const DEFAULT_USERS: [(&str, &str, Role); 3] = [
    ("rodri", "rodrigo@gmail.com", Role::Admin),
    ("avila", "avila@gmail.com", Role::User),
    ("pedro", "pedro@gmail.com", Role::Invited),
];

/// Creates the built-in accounts. Usernames that already exist are left
/// untouched, so restarting against the same database is harmless.
pub async fn seed_default_users(users: &dyn UserService) -> Result<()> {
    for (username, email, role) in DEFAULT_USERS {
        if users.find_by_username(username).await?.is_some() {
            continue;
        }

        users
            .create_user(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password: DEFAULT_PASSWORD.to_string(),
                roles: BTreeSet::from([role]),
            })
            .await?;

        info!(username, role = %role, "Seeded default user");
    }

    Ok(())
}
