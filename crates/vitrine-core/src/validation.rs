//! # Validation Module
//!
//! Input validation for externally supplied storefront values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront form input (currency picker, quantity field)      │
//! │  ├── Basic format checks in the web layer                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - rule validation before money logic runs        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Amount::validate - representation invariants                 │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::validation::{validate_currency_code, validate_quantity};
//!
//! // Validate a customer's display-currency selection
//! validate_currency_code("USD").unwrap();
//!
//! // Validate a cart form quantity
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Currency Code Validator
// =============================================================================

/// Validates a currency code.
///
/// ## Rules
/// - Must not be empty
/// - Must be exactly 3 characters
/// - Must contain only ASCII uppercase letters (ISO 4217 style)
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_currency_code;
///
/// assert!(validate_currency_code("USD").is_ok());
/// assert!(validate_currency_code("usd").is_err());
/// assert!(validate_currency_code("").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency_code".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency_code".to_string(),
            reason: "must be 3 uppercase letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Quantity Validator
// =============================================================================

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0) - the cart form rejects zero
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_currency_code() {
        // Valid codes
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("EUR").is_ok());
        assert!(validate_currency_code("TRY").is_ok());

        // Invalid codes
        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("usd").is_err());
        assert!(validate_currency_code("US").is_err());
        assert!(validate_currency_code("DOLLARS").is_err());
        assert!(validate_currency_code("U5D").is_err());
        assert!(validate_currency_code("US ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        assert_eq!(
            validate_quantity(0).unwrap_err(),
            ValidationError::MustBePositive {
                field: "quantity".to_string()
            }
        );
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }
}
