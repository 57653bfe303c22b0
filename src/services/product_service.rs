//! Domain service for products.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i64),

    /// The product names a maker that does not exist. The row was rejected
    /// by the foreign key.
    #[error("Maker {0} referenced by product does not exist")]
    UnknownMaker(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for ProductError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait ProductService: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ProductError::NotFound`] if no product has this id.
    async fn find_by_id(&self, id: i64) -> Result<Product, ProductError>;

    async fn find_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Products priced within `[min, max]`, both ends inclusive.
    async fn find_by_price_in_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Product>, ProductError>;

    /// Inserts or overwrites a product. The returned product carries the
    /// owning maker's name.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::UnknownMaker`] if the maker reference dangles.
    async fn save(&self, product: Product) -> Result<Product, ProductError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ProductError>;
}
