//! # resto-core: Pure Change Engine for Resto
//!
//! This crate is the **heart** of Resto. It answers one question a cashier
//! asks many times a day: *"the bill is X, the customer gave me Y, which
//! notes and coins do I hand back?"*
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Resto Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Till (apps/till)                             │   │
//! │  │    totale ──► contante ──► calcola ──► breakdown / error        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ resto-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐  │   │
//! │  │   │ validation │ │   change   │ │denomination│ │   format   │  │   │
//! │  │   │ normalize  │ │ calculate  │ │ EURO table │ │ 1.234,50 € │  │   │
//! │  │   │ parse      │ │ decompose  │ │ bill/coin  │ │            │  │   │
//! │  │   └────────────┘ └────────────┘ └────────────┘ └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents
//! - [`denomination`] - The fixed Euro note/coin table
//! - [`validation`] - Input normalization, parsing and business checks
//! - [`change`] - Greedy change decomposition
//! - [`format`] - Italian currency formatting
//! - [`types`] - Result and input DTOs
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, no shared mutable state
//! 2. **Integer Money**: decomposition runs on cents (i64), never on floats
//! 3. **Explicit Errors**: invalid input is a typed [`ValidationError`]
//!
//! ## Example Usage
//!
//! ```rust
//! use resto_core::{calculate, DenominationKind};
//!
//! let result = calculate("4,30", "5").unwrap();
//! assert_eq!(result.change_due_cents.cents(), 70);
//!
//! let first = &result.breakdown[0];
//! assert_eq!(first.denomination, 0.5);
//! assert_eq!(first.count, 1);
//! assert_eq!(first.kind, DenominationKind::Coin);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod denomination;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{calculate, calculate_change, decompose};
pub use denomination::{Denomination, DenominationKind, EURO_DENOMINATIONS};
pub use error::{ValidationError, ValidationResult};
pub use format::format_currency;
pub use money::Money;
pub use types::*;
pub use validation::{normalize_amount, parse_amount};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 code of the only currency the engine handles.
pub const CURRENCY_CODE: &str = "EUR";

/// Minor units (cents) per major unit (euro).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
