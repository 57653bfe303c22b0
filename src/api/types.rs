use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Maker, MakerRef, Product, Role, User};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Makers
// ============================================================================

/// Maker as returned by the API. `productList` is present on single lookups
/// and omitted from listings.
#[derive(Debug, Serialize)]
pub struct MakerDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "productList", skip_serializing_if = "Option::is_none")]
    pub product_list: Option<Vec<ProductSummaryDto>>,
}

impl MakerDto {
    #[must_use]
    pub fn with_products(maker: Maker) -> Self {
        Self {
            id: maker.id.unwrap_or_default(),
            name: maker.name,
            product_list: Some(
                maker
                    .products
                    .into_iter()
                    .map(ProductSummaryDto::from)
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn summary(maker: Maker) -> Self {
        Self {
            id: maker.id.unwrap_or_default(),
            name: maker.name,
            product_list: None,
        }
    }
}

/// A product listed under its maker, without the back-reference.
#[derive(Debug, Serialize)]
pub struct ProductSummaryDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl From<Product> for ProductSummaryDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.unwrap_or_default(),
            name: product.name,
            price: product.price,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MakerRequest {
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MakerRefDto {
    pub id: i64,
    pub name: String,
}

impl From<MakerRef> for MakerRefDto {
    fn from(maker: MakerRef) -> Self {
        Self {
            id: maker.id,
            name: maker.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub maker: MakerRefDto,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.unwrap_or_default(),
            name: product.name,
            price: product.price,
            maker: product.maker.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MakerIdRequest {
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub maker: Option<MakerIdRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
}

/// A user as returned by the API. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            username: user.username,
            email: user.email,
            roles: user.roles.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    pub id: Option<String>,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthLiveResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub uptime_seconds: u64,
    pub checks: HealthReadinessChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthReadinessChecks {
    pub database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maker_listing_omits_product_list() {
        let mut maker = Maker::new("Acme");
        maker.id = Some(3);

        let value = serde_json::to_value(MakerDto::summary(maker)).unwrap();
        assert_eq!(value, json!({ "id": 3, "name": "Acme" }));
    }

    #[test]
    fn maker_lookup_includes_products_without_back_reference() {
        let mut maker = Maker::new("Acme");
        maker.id = Some(1);
        maker.products.push(Product {
            id: Some(5),
            name: "Anvil".into(),
            price: Decimal::new(1999, 2),
            maker: MakerRef::new(1),
        });

        let value = serde_json::to_value(MakerDto::with_products(maker)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Acme",
                "productList": [{ "id": 5, "name": "Anvil", "price": 19.99 }]
            })
        );
    }

    #[test]
    fn product_request_accepts_string_and_number_prices() {
        let from_str: ProductRequest =
            serde_json::from_value(json!({ "name": "a", "price": "1.50", "maker": { "id": 1 } }))
                .unwrap();
        let from_num: ProductRequest =
            serde_json::from_value(json!({ "name": "a", "price": 2, "maker": { "id": 1 } }))
                .unwrap();

        assert_eq!(from_str.price, Some(Decimal::new(150, 2)));
        assert_eq!(from_num.price, Some(Decimal::from(2)));
    }

    #[test]
    fn user_dto_has_no_password_field() {
        let user = User::new("pedro", "pedro@gmail.com", "$argon2id$...", [Role::Invited].into());
        let value = serde_json::to_value(UserDto::from(user)).unwrap();

        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["roles"], json!(["INVITED"]));
    }
}
