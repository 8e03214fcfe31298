//! # Domain Types
//!
//! Inputs and results of a change calculation.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐          ┌──────────────────────────────────┐    │
//! │  │ CalculationInput │          │ ChangeCalculation                │    │
//! │  │ ──────────────── │ calculate│ ──────────────────────────────── │    │
//! │  │ bill_total  "…"  │ ───────► │ change_due        0.7  (f64)     │    │
//! │  │ cash_received "…"│          │ change_due_cents  70   (Money)   │    │
//! │  └──────────────────┘          │ breakdown ─┐                     │    │
//! │                                └────────────┼─────────────────────┘    │
//! │                                             ▼                          │
//! │                                ┌──────────────────────────────────┐    │
//! │                                │ ChangeBreakdownEntry             │    │
//! │                                │ denomination 0.5, count 1, coin  │    │
//! │                                │ denomination 0.2, count 1, coin  │    │
//! │                                └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::denomination::{Denomination, DenominationKind};
use crate::error::ValidationResult;
use crate::money::Money;

// =============================================================================
// Amount Field
// =============================================================================

/// Identifies which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum AmountField {
    BillTotal,
    CashReceived,
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountField::BillTotal => f.write_str("bill total"),
            AmountField::CashReceived => f.write_str("cash received"),
        }
    }
}

// =============================================================================
// Calculation Input
// =============================================================================

/// The two amounts as typed by the cashier, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub bill_total: String,
    pub cash_received: String,
}

impl CalculationInput {
    pub fn new(bill_total: impl Into<String>, cash_received: impl Into<String>) -> Self {
        CalculationInput {
            bill_total: bill_total.into(),
            cash_received: cash_received.into(),
        }
    }

    /// Both fields hold some text. Says nothing about whether they parse.
    pub fn is_complete(&self) -> bool {
        !self.bill_total.is_empty() && !self.cash_received.is_empty()
    }

    /// Runs [`crate::calculate`] on the two texts.
    pub fn calculate(&self) -> ValidationResult<ChangeCalculation> {
        crate::change::calculate(&self.bill_total, &self.cash_received)
    }
}

// =============================================================================
// Change Breakdown Entry
// =============================================================================

/// One line of the breakdown: "hand back `count` × `denomination`".
///
/// ## Serialization
/// ```json
/// { "denomination": 0.5, "count": 1, "type": "coin" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeBreakdownEntry {
    /// Denomination value in euros.
    pub denomination: f64,

    /// How many pieces of this denomination. Never zero.
    #[ts(type = "number")]
    pub count: u64,

    /// Bill or coin.
    #[serde(rename = "type")]
    pub kind: DenominationKind,
}

impl ChangeBreakdownEntry {
    pub fn new(denomination: &Denomination, count: u64) -> Self {
        ChangeBreakdownEntry {
            denomination: denomination.major_value(),
            count,
            kind: denomination.kind(),
        }
    }

    /// Value covered by this line (`denomination × count`).
    pub fn subtotal(&self) -> Money {
        Money::from_major(self.denomination) * self.count as i64
    }
}

// =============================================================================
// Change Calculation
// =============================================================================

/// The outcome of a successful calculation.
///
/// Computed fresh on every call; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChangeCalculation {
    /// Change due in euros (`cash_received - bill_total`), for display.
    pub change_due: f64,

    /// Change due rounded to whole cents; the amount that was decomposed.
    pub change_due_cents: Money,

    /// Entries from highest to lowest denomination, zero counts omitted.
    pub breakdown: Vec<ChangeBreakdownEntry>,
}

impl ChangeCalculation {
    /// True when no change is due (exact payment).
    pub fn is_exact(&self) -> bool {
        self.breakdown.is_empty()
    }

    /// Total number of notes and coins to hand back.
    pub fn piece_count(&self) -> u64 {
        self.breakdown.iter().map(|entry| entry.count).sum()
    }

    /// Sum of every breakdown line. Equals `change_due_cents`.
    pub fn breakdown_total(&self) -> Money {
        self.breakdown.iter().map(ChangeBreakdownEntry::subtotal).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
