//! # Change Calculation
//!
//! Greedy decomposition of change due into Euro notes and coins.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bill 12,50   cash 50                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  change_due = 37.5  ──► round(37.5 × 100) = 3750 cents                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for d in EURO_DENOMINATIONS (high → low):                              │
//! │       count = remaining / d                                             │
//! │       if count > 0: emit (d, count); remaining -= d × count             │
//! │                                                                         │
//! │  5000 → 0   2000 → 1 (1750)   1000 → 1 (750)   500 → 1 (250)            │
//! │  200 → 1 (50)   100 → 0   50 → 1 (0)   ...                              │
//! │                                                                         │
//! │  Result: 20 € ×1, 10 € ×1, 5 € ×1, 2 € ×1, 0,50 € ×1                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The smallest denomination is one cent, so any whole number of cents is
//! fully decomposed.

use crate::denomination::EURO_DENOMINATIONS;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{AmountField, ChangeBreakdownEntry, ChangeCalculation};
use crate::validation::{parse_amount, validate_amounts};

// =============================================================================
// Validated Entry Point
// =============================================================================

/// Validates the two typed amounts and computes the change breakdown.
///
/// Either a complete breakdown or an error is returned, never both.
///
/// ## Errors
/// - [`ValidationError::InvalidAmount`] if either text does not parse
///   (the bill total is checked first)
/// - [`ValidationError::NonPositiveTotal`] if the bill total is ≤ 0
/// - [`ValidationError::InsufficientCash`] if cash is below the bill total
///
/// ## Example
/// ```rust
/// use resto_core::{calculate, ValidationError};
///
/// let result = calculate("9.99", "10.00").unwrap();
/// assert_eq!(result.breakdown.len(), 1);
/// assert_eq!(result.breakdown[0].denomination, 0.01);
///
/// assert_eq!(calculate("0", "10"), Err(ValidationError::NonPositiveTotal));
/// ```
pub fn calculate(bill_total: &str, cash_received: &str) -> ValidationResult<ChangeCalculation> {
    let bill = parse_amount(bill_total).ok_or(ValidationError::InvalidAmount {
        field: AmountField::BillTotal,
    })?;
    let cash = parse_amount(cash_received).ok_or(ValidationError::InvalidAmount {
        field: AmountField::CashReceived,
    })?;

    validate_amounts(bill, cash)?;

    let change_due = cash - bill;
    let change_due_cents = Money::from_major(change_due);

    Ok(ChangeCalculation {
        change_due,
        change_due_cents,
        breakdown: decompose(change_due_cents),
    })
}

// =============================================================================
// Pre-validated Entry Point
// =============================================================================

/// Breaks `cash_received - bill_total` into denominations.
///
/// Assumes the caller already validated the amounts. A negative (or NaN)
/// difference yields an empty list.
///
/// ## Example
/// ```rust
/// use resto_core::calculate_change;
///
/// let breakdown = calculate_change(17.00, 20.00);
/// assert_eq!(breakdown.len(), 2);
/// assert_eq!(breakdown[0].denomination, 2.0);
/// assert_eq!(breakdown[1].denomination, 1.0);
///
/// assert!(calculate_change(20.00, 17.00).is_empty());
/// ```
pub fn calculate_change(bill_total: f64, cash_received: f64) -> Vec<ChangeBreakdownEntry> {
    let change_due = cash_received - bill_total;
    if change_due.is_nan() || change_due < 0.0 {
        return Vec::new();
    }

    decompose(Money::from_major(change_due))
}

// =============================================================================
// Greedy Decomposition
// =============================================================================

/// Decomposes an amount of cents using [`EURO_DENOMINATIONS`].
///
/// Entries come out highest denomination first; denominations that are not
/// used are omitted. Zero or negative amounts give an empty breakdown.
pub fn decompose(amount: Money) -> Vec<ChangeBreakdownEntry> {
    let mut breakdown = Vec::new();
    if !amount.is_positive() {
        return breakdown;
    }

    let mut remaining = amount;
    for denomination in EURO_DENOMINATIONS.iter() {
        let count = remaining.cents() / denomination.minor_value().cents();
        if count > 0 {
            remaining -= denomination.minor_value() * count;
            breakdown.push(ChangeBreakdownEntry::new(denomination, count as u64));
        }
    }

    debug_assert!(
        remaining.is_zero(),
        "{} cents left after exhausting the denomination table",
        remaining.cents()
    );

    breakdown
}

// =============================================================================
// Unit Tests
// =============================================================================
