//! # Error Types
//!
//! Domain-specific error types for resto-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  resto-core errors (this file)                                         │
//! │  └── ValidationError  - Input rejected before decomposition            │
//! │                                                                         │
//! │  till errors (apps/till)                                               │
//! │  ├── ApiError         - What the cashier sees ({ code, message })      │
//! │  └── TillError        - Startup / terminal failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → localized message                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant is user-correctable; none of them is fatal
//! 3. The decomposition itself never fails: it only runs on validated input

use thiserror::Error;

use crate::types::AmountField;

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons a change calculation is refused.
///
/// ## Check Order
/// ```text
/// bill total text ──► parse ──┐
///                             ├──► InvalidAmount { field }
/// cash text ────────► parse ──┘
///                             │
///                             ▼
///                  bill total <= 0 ? ──► NonPositiveTotal
///                             │
///                             ▼
///                  cash < bill total ? ──► InsufficientCash
///                             │
///                             ▼
///                        decompose
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An input did not parse as a decimal amount.
    ///
    /// ## When This Occurs
    /// - Empty text (or text with no digits at all)
    /// - A lone separator: `"."`, `","`
    /// - More than one separator: `"1,2,3"`, `"1.234,50"`
    #[error("{field} is not a valid amount")]
    InvalidAmount { field: AmountField },

    /// The bill total is zero or negative.
    #[error("bill total must be greater than zero")]
    NonPositiveTotal,

    /// The customer handed over less than the bill total.
    #[error("cash received {cash_received} is less than bill total {bill_total}")]
    InsufficientCash { bill_total: f64, cash_received: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
