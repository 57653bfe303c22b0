//! `SeaORM` implementation of the `MakerService` trait.

use async_trait::async_trait;

use crate::db::{Repository, Store};
use crate::models::Maker;
use crate::services::maker_service::{MakerError, MakerService};

pub struct SeaOrmMakerService {
    store: Store,
}

impl SeaOrmMakerService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MakerService for SeaOrmMakerService {
    async fn find_by_id(&self, id: i64) -> Result<Maker, MakerError> {
        self.store
            .maker_repo()
            .find_by_id(id)
            .await?
            .ok_or(MakerError::NotFound(id))
    }

    async fn find_all(&self) -> Result<Vec<Maker>, MakerError> {
        Ok(self.store.maker_repo().find_all().await?)
    }

    async fn save(&self, maker: Maker) -> Result<Maker, MakerError> {
        Ok(self.store.maker_repo().save(maker).await?)
    }

    async fn rename(&self, id: i64, name: &str) -> Result<(), MakerError> {
        if self.store.maker_repo().rename(id, name).await? {
            Ok(())
        } else {
            Err(MakerError::NotFound(id))
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), MakerError> {
        self.store.maker_repo().delete_by_id(id).await?;
        Ok(())
    }
}
