use std::collections::BTreeSet;

use super::Role;

/// A user account. Only the Argon2 hash of the password is ever held.
///
/// `id` is `None` until the user has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub roles: BTreeSet<Role>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// A new, unsaved user. `password_hash` must already be hashed.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        roles: BTreeSet<Role>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            roles,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
