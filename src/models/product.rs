use rust_decimal::Decimal;

/// Reference from a product to its owning maker.
///
/// `name` is filled in when the maker row was loaded alongside the product
/// and left empty when only the id is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakerRef {
    pub id: i64,
    pub name: String,
}

impl MakerRef {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    pub maker: MakerRef,
}

impl Product {
    /// A new, unsaved product owned by `maker`.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal, maker: MakerRef) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            maker,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub fn set_maker(&mut self, maker: MakerRef) {
        self.maker = maker;
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn price_in_range(&self, min: Decimal, max: Decimal) -> bool {
        self.price >= min && self.price <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn price_range_is_inclusive() {
        let product = Product::new("Widget", dec("9.99"), MakerRef::new(1));
        assert!(product.price_in_range(dec("9.99"), dec("9.99")));
        assert!(product.price_in_range(dec("1"), dec("10")));
        assert!(!product.price_in_range(dec("10"), dec("20")));
    }

    #[test]
    fn setters_overwrite_fields() {
        let mut product = Product::new("Widget", dec("1.50"), MakerRef::new(1));
        product.set_name("Gadget");
        product.set_price(dec("2.25"));
        product.set_maker(MakerRef::new(7));

        assert_eq!(product.name, "Gadget");
        assert_eq!(product.price, dec("2.25"));
        assert_eq!(product.maker.id, 7);
        assert_eq!(product.id, None);
    }
}
