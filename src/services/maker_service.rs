//! Domain service for makers.

use thiserror::Error;

use crate::models::Maker;

#[derive(Debug, Error)]
pub enum MakerError {
    #[error("Maker {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for MakerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Maker operations as seen by the HTTP handlers.
#[async_trait::async_trait]
pub trait MakerService: Send + Sync {
    /// The maker with its product collection loaded.
    ///
    /// # Errors
    ///
    /// Returns [`MakerError::NotFound`] if no maker has this id.
    async fn find_by_id(&self, id: i64) -> Result<Maker, MakerError>;

    /// All makers, oldest first, without their products.
    async fn find_all(&self) -> Result<Vec<Maker>, MakerError>;

    /// Inserts a new maker or overwrites an existing one, cascading to its
    /// product collection.
    async fn save(&self, maker: Maker) -> Result<Maker, MakerError>;

    /// Changes the maker's name without touching its products.
    ///
    /// # Errors
    ///
    /// Returns [`MakerError::NotFound`] if no maker has this id.
    async fn rename(&self, id: i64, name: &str) -> Result<(), MakerError>;

    /// Deletes the maker and every product it owns. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), MakerError>;
}
