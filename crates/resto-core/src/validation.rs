//! # Validation Module
//!
//! Turns cashier-typed text into amounts the engine can trust.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: normalize_amount (pure text transform)                       │
//! │  ├── drop everything except digits, '.' and ','                        │
//! │  └── first ',' becomes '.'           "€ 12,50" ──► "12.50"              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: parse_amount (strict f64 parser)                             │
//! │  ├── "" / "." / ","            ──► rejected                            │
//! │  └── "1.2,3" / "1.2.3"         ──► rejected (never truncated)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: validate_amounts (business rules)                            │
//! │  ├── bill total must be > 0                                            │
//! │  └── cash must cover the bill                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Text Normalization
// =============================================================================

/// Cleans raw input into a candidate decimal string.
///
/// Keeps ASCII digits, `.` and `,`; then replaces the **first** `,` with
/// `.` so a decimal comma is accepted.
///
/// ## Example
/// ```rust
/// use resto_core::normalize_amount;
///
/// assert_eq!(normalize_amount("12,50"), "12.50");
/// assert_eq!(normalize_amount("€ 4.30 "), "4.30");
/// assert_eq!(normalize_amount("1,2,3"), "1.2,3");
/// assert_eq!(normalize_amount("abc"), "");
/// ```
pub fn normalize_amount(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    kept.replacen(',', ".", 1)
}

/// Normalizes and parses an amount in euros.
///
/// Returns `None` when the normalized text is not a single finite decimal
/// number. Text with more than one separator left after normalization is
/// rejected outright.
///
/// ## Example
/// ```rust
/// use resto_core::parse_amount;
///
/// assert_eq!(parse_amount("12,50"), Some(12.5));
/// assert_eq!(parse_amount(",5"), Some(0.5));
/// assert_eq!(parse_amount("1,2,3"), None);
/// assert_eq!(parse_amount(""), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<f64> {
    normalize_amount(raw)
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

// =============================================================================
// Business Rules
// =============================================================================

/// Checks parsed amounts before any change is computed.
///
/// ## Rules
/// - Bill total must be positive (> 0)
/// - Cash received must be at least the bill total (exact payment is fine)
///
/// ## Example
/// ```rust
/// use resto_core::validation::validate_amounts;
///
/// assert!(validate_amounts(4.30, 5.00).is_ok());
/// assert!(validate_amounts(5.00, 5.00).is_ok());
/// assert!(validate_amounts(0.0, 5.00).is_err());
/// assert!(validate_amounts(5.00, 4.30).is_err());
/// ```
pub fn validate_amounts(bill_total: f64, cash_received: f64) -> ValidationResult<()> {
    if bill_total <= 0.0 {
        return Err(ValidationError::NonPositiveTotal);
    }

    if cash_received < bill_total {
        return Err(ValidationError::InsufficientCash {
            bill_total,
            cash_received,
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
    fn test_normalize_amount() {
        assert_eq!(normalize_amount("12,50"), "12.50");
        assert_eq!(normalize_amount("12.50"), "12.50");
        assert_eq!(normalize_amount(" 50 € "), "50");
        assert_eq!(normalize_amount("-5"), "5");
        assert_eq!(normalize_amount("1e3"), "13");
        assert_eq!(normalize_amount(""), "");
    }

    #[test]
    fn test_normalize_only_first_comma() {
        assert_eq!(normalize_amount("1,2,3"), "1.2,3");
        assert_eq!(normalize_amount("1.234,50"), "1.234.50");
    }

    #[test]
    fn test_parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("4.30"), Some(4.3));
        assert_eq!(parse_amount("4,30"), Some(4.3));
        assert_eq!(parse_amount("50"), Some(50.0));
        assert_eq!(parse_amount("5."), Some(5.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount(","), None);
    }

    #[test]
    fn test_parse_amount_rejects_multiple_separators() {
        assert_eq!(parse_amount("1,2,3"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("1.234,50"), None);
        assert_eq!(parse_amount(",,"), None);
    }

    #[test]
    fn test_parse_amount_rejects_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), None);
    }

    #[test]
    fn test_validate_amounts() {
        assert!(validate_amounts(4.30, 5.00).is_ok());
        assert!(validate_amounts(5.00, 5.00).is_ok());

        assert_eq!(
            validate_amounts(0.0, 5.0),
            Err(ValidationError::NonPositiveTotal)
        );
        assert_eq!(
            validate_amounts(10.0, 9.99),
            Err(ValidationError::InsufficientCash {
                bill_total: 10.0,
                cash_received: 9.99,
            })
        );
    }

    #[test]
    fn test_non_positive_checked_before_insufficient() {
        assert_eq!(
            validate_amounts(0.0, 0.0),
            Err(ValidationError::NonPositiveTotal)
        );
    }
}
