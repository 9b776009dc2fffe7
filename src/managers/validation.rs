//! Field checks applied by the managers before anything reaches the store.

use crate::error::CatalogError;
use rust_decimal::Decimal;

/// Lowest accepted product price.
pub const MIN_PRICE: Decimal = Decimal::ONE;
/// Highest accepted product price.
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Returns the trimmed value, or a validation error when nothing is left.
pub fn require_text(field: &str, value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Checks the price as given, before any rounding.
pub fn require_price(price: Decimal) -> Result<Decimal, CatalogError> {
    if price < MIN_PRICE || price > MAX_PRICE {
        return Err(CatalogError::Validation(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}, got {price}"
        )));
    }
    Ok(price)
}

/// References are required: zero (the default for a missing field) and negatives are rejected.
pub fn require_reference(field: &str, id: i64) -> Result<(), CatalogError> {
    if id <= 0 {
        return Err(CatalogError::Validation(format!(
            "{field} must be a positive id, got {id}"
        )));
    }
    Ok(())
}
