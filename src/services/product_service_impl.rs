//! `SeaORM` implementation of the `ProductService` trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::SqlErr;

use crate::db::{Repository, Store, sql_error};
use crate::models::Product;
use crate::services::product_service::{ProductError, ProductService};

pub struct SeaOrmProductService {
    store: Store,
}

impl SeaOrmProductService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for SeaOrmProductService {
    async fn find_by_id(&self, id: i64) -> Result<Product, ProductError> {
        self.store
            .product_repo()
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.store.product_repo().find_all().await?)
    }

    async fn find_by_price_in_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, ProductError> {
        Ok(self
            .store
            .product_repo()
            .find_by_price_in_range(min, max)
            .await?)
    }

    async fn save(&self, product: Product) -> Result<Product, ProductError> {
        let repo = self.store.product_repo();
        let maker_id = product.maker.id;

        let saved = repo.save(product).await.map_err(|err| match sql_error(&err) {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ProductError::UnknownMaker(maker_id),
            _ => ProductError::from(err),
        })?;

        // Reload so the response carries the maker's name.
        match saved.id {
            Some(id) => Ok(repo.find_by_id(id).await?.unwrap_or(saved)),
            None => Ok(saved),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ProductError> {
        self.store.product_repo().delete_by_id(id).await?;
        Ok(())
    }
}
