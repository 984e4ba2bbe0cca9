//! Input Validation Rules

use crate::error::{MarketplaceError, MarketplaceResult};

/// Trimmed value of a required text field
pub fn required_text(field: &str, value: &str) -> MarketplaceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MarketplaceError::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Amounts and prices: finite and not negative
pub fn non_negative(field: &str, value: f64) -> MarketplaceResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(MarketplaceError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(value)
}

/// Non-blank entries only, trimmed
pub fn text_list(field: &str, values: &[String]) -> MarketplaceResult<Vec<String>> {
    values.iter().map(|v| required_text(field, v)).collect()
}
