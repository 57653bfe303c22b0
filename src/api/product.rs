use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::auth::{Principal, READ_ROLES, WRITE_ROLES};
use super::validation::{parse_id, parse_price, validate_name, validate_price_range};
use super::{ApiError, AppState, PriceRangeQuery, ProductDto, ProductRequest};
use crate::models::{MakerRef, Product};

/// Fields of a product request once every one of them is known to be present.
struct ProductFields {
    name: String,
    price: Decimal,
    maker: MakerRef,
}

fn require_fields(payload: ProductRequest) -> Result<ProductFields, ApiError> {
    let name = validate_name(payload.name.as_deref())?.to_string();
    let price = payload
        .price
        .ok_or_else(|| ApiError::validation("Price is required"))?;
    let maker_id = payload
        .maker
        .and_then(|m| m.id)
        .ok_or_else(|| ApiError::validation("Maker id is required"))?;

    Ok(ProductFields {
        name,
        price,
        maker: MakerRef::new(maker_id),
    })
}

/// `GET /api/product/find/{id}`
pub async fn find_by_id(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, ApiError> {
    principal.require_any(READ_ROLES)?;
    let id = parse_id(&id)?;

    let product = state.products().find_by_id(id).await?;
    Ok(Json(product.into()))
}

/// `GET /api/product/findAll`
pub async fn find_all(
    State(state): State<Arc<AppState>>,
    principal: Principal,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    principal.require_any(READ_ROLES)?;

    let products = state.products().find_all().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// `GET /api/product/findByPriceInRange?minPrice=&maxPrice=`
pub async fn find_by_price_in_range(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Query(query): Query<PriceRangeQuery>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    principal.require_any(READ_ROLES)?;
    let min = parse_price("minPrice", query.min_price.as_deref())?;
    let max = parse_price("maxPrice", query.max_price.as_deref())?;
    validate_price_range(min, max)?;

    let products = state.products().find_by_price_in_range(min, max).await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// `POST /api/product/save`
pub async fn save(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    principal.require_any(WRITE_ROLES)?;
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;
    let fields = require_fields(payload)?;

    let product = state
        .products()
        .save(Product::new(fields.name, fields.price, fields.maker))
        .await?;
    let id = product.id.unwrap_or_default();
    tracing::info!(product_id = id, maker_id = product.maker.id, "Product created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/product/find/{id}"))],
        Json(ProductDto::from(product)),
    ))
}

/// `PUT /api/product/update/{id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    principal.require_any(WRITE_ROLES)?;
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let mut product = state.products().find_by_id(id).await?;
    let fields = require_fields(payload)?;
    product.set_name(fields.name);
    product.set_price(fields.price);
    product.set_maker(fields.maker);
    state.products().save(product).await?;

    Ok("Registro Actualizado")
}

/// `DELETE /api/product/delete/{id}`
pub async fn delete(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    principal.require_any(WRITE_ROLES)?;
    let id = parse_id(&id)?;

    state.products().delete_by_id(id).await?;
    Ok("Registro Eliminado")
}
