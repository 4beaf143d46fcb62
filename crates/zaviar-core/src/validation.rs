//! # Validation Module
//!
//! Boundary validation for Zaviar Books.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation forms (external)                                │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Record constructors (Rust)                                   │
//! │  └── THIS MODULE: a rejected input never becomes a record              │
//! │                                                                         │
//! │  The record log only ever contains records that passed these checks.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PARTY_NAME_LEN, MAX_QUANTITY_PER_RECORD};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a record quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_QUANTITY_PER_RECORD
///
/// ## Example
/// ```rust
/// use zaviar_core::validation::validate_quantity;
///
/// assert!(validate_quantity(120).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-5).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_QUANTITY_PER_RECORD {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_QUANTITY_PER_RECORD,
        });
    }

    Ok(())
}

/// Validates a monetary amount that must be strictly positive.
///
/// Applies to unit rates, expense amounts, opening balances, and worker
/// payouts. Zero-rupee entries carry no information and are rejected.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a counterparty or custom-item name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most MAX_PARTY_NAME_LEN characters
///
/// ## Returns
/// The trimmed name.
///
/// ## Example
/// ```rust
/// use zaviar_core::validation::validate_name;
///
/// assert_eq!(validate_name("customer", "  Haji Traders ").unwrap(), "Haji Traders");
/// assert!(validate_name("customer", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_PARTY_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_PARTY_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(500).is_ok());
        assert!(validate_quantity(MAX_QUANTITY_PER_RECORD).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(MAX_QUANTITY_PER_RECORD + 1).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("amount", Money::from_rupees(45)).is_ok());
        assert!(validate_amount("amount", Money::zero()).is_err());
        assert!(validate_amount("amount", Money::from_rupees(-10)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("customer", "Haji Traders").unwrap(), "Haji Traders");
        assert_eq!(validate_name("customer", "  Bashir & Sons  ").unwrap(), "Bashir & Sons");

        assert!(validate_name("customer", "").is_err());
        assert!(validate_name("customer", "   ").is_err());
        assert!(validate_name("customer", &"A".repeat(500)).is_err());
    }
}
