use super::Product;

/// A manufacturer and the products it owns.
///
/// `id` is `None` until the maker has been persisted. `products` is only
/// populated by lookups that load the collection; `find_all` leaves it empty.
/// Products dropped through [`Maker::remove_product`] are remembered so that
/// saving deletes exactly those rows and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maker {
    pub id: Option<i64>,
    pub name: String,
    pub products: Vec<Product>,
    pub(crate) removed_products: Vec<i64>,
}

impl Maker {
    /// A new, unsaved maker with no products.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            products: Vec::new(),
            removed_products: Vec::new(),
        }
    }

    /// A persisted maker as loaded from storage.
    #[must_use]
    pub fn loaded(id: i64, name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            products,
            removed_products: Vec::new(),
        }
    }

    /// Drops a product from the owned collection. Saving the maker afterwards
    /// deletes the product row.
    pub fn remove_product(&mut self, product_id: i64) -> Option<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == Some(product_id))?;
        self.removed_products.push(product_id);
        Some(self.products.remove(index))
    }

    /// Ids of products dropped since the maker was loaded.
    #[must_use]
    pub fn removed_products(&self) -> &[i64] {
        &self.removed_products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MakerRef;
    use rust_decimal::Decimal;

    fn product(id: i64) -> Product {
        Product {
            id: Some(id),
            name: format!("Product {id}"),
            price: Decimal::new(999, 2),
            maker: MakerRef::new(1),
        }
    }

    #[test]
    fn new_maker_is_unsaved_and_empty() {
        let maker = Maker::new("Acme");
        assert_eq!(maker.id, None);
        assert_eq!(maker.name, "Acme");
        assert!(maker.products.is_empty());
    }

    #[test]
    fn remove_product_takes_matching_id_only() {
        let mut maker = Maker::new("Acme");
        maker.products = vec![product(1), product(2)];

        let removed = maker.remove_product(2).expect("product 2 is owned");
        assert_eq!(removed.id, Some(2));
        assert_eq!(maker.products.len(), 1);
        assert!(maker.remove_product(42).is_none());
        assert_eq!(maker.removed_products(), &[2]);
    }
}
