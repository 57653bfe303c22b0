use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use super::Repository;
use crate::entities::{makers, prelude::*, products};
use crate::models::{MakerRef, Product};

pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Products whose price lies in `[min, max]`.
    ///
    /// Prices are stored as decimal text, so the comparison runs on
    /// [`Decimal`] values rather than in SQL.
    pub async fn find_by_price_in_range(&self, min: Decimal, max: Decimal) -> Result<Vec<Product>> {
        let products = self.find_all().await?;
        Ok(products
            .into_iter()
            .filter(|p| p.price_in_range(min, max))
            .collect())
    }
}

#[async_trait::async_trait]
impl Repository<Product, i64> for ProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let row = Products::find_by_id(id)
            .find_also_related(Makers)
            .one(&self.conn)
            .await
            .context("Failed to query product by ID")?;

        row.map(|(product, maker)| product_with_maker(product, maker))
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = Products::find()
            .find_also_related(Makers)
            .order_by_asc(products::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list products")?;

        rows.into_iter()
            .map(|(product, maker)| product_with_maker(product, maker))
            .collect()
    }

    /// The referenced maker is not looked up first; a dangling reference
    /// fails on the foreign key.
    async fn save(&self, product: Product) -> Result<Product> {
        let active = product_to_active_model(&product);
        let row = match product.id {
            None => active.insert(&self.conn).await.with_context(|| {
                format!("Failed to insert product for maker {}", product.maker.id)
            })?,
            Some(id) => active
                .update(&self.conn)
                .await
                .with_context(|| format!("Failed to update product {id}"))?,
        };

        product_from_model(row, product.maker)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        Products::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete product")?;
        Ok(())
    }
}

fn product_with_maker(model: products::Model, maker: Option<makers::Model>) -> Result<Product> {
    let owner = maker.map_or_else(
        || MakerRef::new(model.maker_id),
        |m| MakerRef {
            id: m.id,
            name: m.name,
        },
    );
    product_from_model(model, owner)
}

pub(super) fn product_from_model(model: products::Model, maker: MakerRef) -> Result<Product> {
    let price = Decimal::from_str(&model.price)
        .with_context(|| format!("Invalid stored price for product {}: {}", model.id, model.price))?;

    Ok(Product {
        id: Some(model.id),
        name: model.name,
        price,
        maker,
    })
}

pub(super) fn product_to_active_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: product.id.map_or(NotSet, Set),
        name: Set(product.name.clone()),
        price: Set(product.price.to_string()),
        maker_id: Set(product.maker.id),
    }
}
