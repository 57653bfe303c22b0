use anyhow::{Context, Result};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::Repository;
use super::product::{product_from_model, product_to_active_model};
use crate::entities::{makers, prelude::*, products};
use crate::models::{Maker, MakerRef, Product};

pub struct MakerRepository {
    conn: DatabaseConnection,
}

impl MakerRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Updates only the maker's name, leaving its products untouched.
    /// Returns `false` when no maker has the id.
    pub async fn rename(&self, id: i64, name: &str) -> Result<bool> {
        let result = Makers::update_many()
            .col_expr(makers::Column::Name, Expr::value(name))
            .filter(makers::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .with_context(|| format!("Failed to rename maker {id}"))?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait::async_trait]
impl Repository<Maker, i64> for MakerRepository {
    /// Loads the maker together with its products.
    async fn find_by_id(&self, id: i64) -> Result<Option<Maker>> {
        let Some(maker) = Makers::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query maker by ID")?
        else {
            return Ok(None);
        };

        let owned = maker
            .find_related(Products)
            .order_by_asc(products::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to load products for maker")?;

        let owner = MakerRef {
            id: maker.id,
            name: maker.name.clone(),
        };
        let products = owned
            .into_iter()
            .map(|p| product_from_model(p, owner.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Maker::loaded(maker.id, maker.name, products)))
    }

    /// Parent rows only; the product collections are left empty.
    async fn find_all(&self) -> Result<Vec<Maker>> {
        let makers = Makers::find()
            .order_by_asc(makers::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list makers")?;

        Ok(makers
            .into_iter()
            .map(|m| Maker::loaded(m.id, m.name, Vec::new()))
            .collect())
    }

    /// Persists the maker and cascades to its product collection: new
    /// products are inserted, existing ones updated, and products removed
    /// from the collection since it was loaded are deleted. Rows written
    /// concurrently by others are left alone.
    async fn save(&self, maker: Maker) -> Result<Maker> {
        let txn = self.conn.begin().await?;

        let model = match maker.id {
            None => makers::ActiveModel {
                name: Set(maker.name),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .context("Failed to insert maker")?,
            Some(id) => makers::ActiveModel {
                id: Set(id),
                name: Set(maker.name),
            }
            .update(&txn)
            .await
            .with_context(|| format!("Failed to update maker {id}"))?,
        };

        if !maker.removed_products.is_empty() {
            Products::delete_many()
                .filter(products::Column::MakerId.eq(model.id))
                .filter(products::Column::Id.is_in(maker.removed_products))
                .exec(&txn)
                .await
                .context("Failed to delete removed products")?;
        }

        let owner = MakerRef {
            id: model.id,
            name: model.name.clone(),
        };

        let mut saved = Vec::with_capacity(maker.products.len());
        for product in maker.products {
            let product = Product {
                maker: owner.clone(),
                ..product
            };
            let active = product_to_active_model(&product);
            let row = if product.id.is_some() {
                active.update(&txn).await?
            } else {
                active.insert(&txn).await?
            };
            saved.push(product_from_model(row, owner.clone())?);
        }

        txn.commit().await?;

        Ok(Maker::loaded(model.id, model.name, saved))
    }

    /// Deletes the maker's products and then the maker in one transaction.
    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let txn = self.conn.begin().await?;

        Products::delete_many()
            .filter(products::Column::MakerId.eq(id))
            .exec(&txn)
            .await
            .context("Failed to delete products of maker")?;

        Makers::delete_by_id(id)
            .exec(&txn)
            .await
            .context("Failed to delete maker")?;

        txn.commit().await?;
        Ok(())
    }
}
