use std::str::FromStr;

use rust_decimal::Decimal;

use super::ApiError;

/// Parses a record id taken from the path or query string.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::validation(format!("Invalid ID: '{}'. ID must be an integer", raw)))
}

pub fn validate_name(name: Option<&str>) -> Result<&str, ApiError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ApiError::validation("Name cannot be blank")),
    }
}

/// Parses a required decimal query parameter.
pub fn parse_price(field: &str, raw: Option<&str>) -> Result<Decimal, ApiError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation(format!("{} is required", field)))?;

    Decimal::from_str(raw)
        .map_err(|_| ApiError::validation(format!("Invalid {}: '{}'", field, raw)))
}

pub fn validate_price_range(min: Decimal, max: Decimal) -> Result<(), ApiError> {
    if min > max {
        return Err(ApiError::validation(format!(
            "minPrice ({}) must not exceed maxPrice ({})",
            min, max
        )));
    }
    Ok(())
}
