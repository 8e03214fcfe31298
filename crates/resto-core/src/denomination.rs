//! # Denominations
//!
//! The Euro notes and coins a till hands back as change.
//!
//! ## The Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BILLS                         COINS                                    │
//! │  ─────                         ─────                                    │
//! │  €50  (5000)                   €2    (200)     €0.10 (10)               │
//! │  €20  (2000)                   €1    (100)     €0.05 (5)                │
//! │  €10  (1000)                   €0.50 (50)      €0.02 (2)                │
//! │  €5   (500)                    €0.20 (20)      €0.01 (1)                │
//! │                                                                         │
//! │  Sorted high → low. Greedy walking of this order yields the minimum     │
//! │  number of pieces: the Euro series is a canonical coin system.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! €100 and larger notes are deliberately absent: a coffee bar does not
//! hand them out as change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Denomination Kind
// =============================================================================

/// Whether a denomination is a paper bill or a coin.
///
/// Classification only: it never changes the decomposition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DenominationKind {
    Bill,
    Coin,
}

// =============================================================================
// Denomination
// =============================================================================

/// A single note or coin value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    /// Value in cents.
    minor_value: Money,

    /// Bill or coin.
    kind: DenominationKind,
}

impl Denomination {
    /// Creates a bill worth `cents`.
    pub const fn bill(cents: i64) -> Self {
        Denomination {
            minor_value: Money::from_cents(cents),
            kind: DenominationKind::Bill,
        }
    }

    /// Creates a coin worth `cents`.
    pub const fn coin(cents: i64) -> Self {
        Denomination {
            minor_value: Money::from_cents(cents),
            kind: DenominationKind::Coin,
        }
    }

    /// Value in cents.
    #[inline]
    pub const fn minor_value(&self) -> Money {
        self.minor_value
    }

    /// Value in euros (`minor_value / 100`).
    ///
    /// ```rust
    /// use resto_core::EURO_DENOMINATIONS;
    ///
    /// assert_eq!(EURO_DENOMINATIONS[0].major_value(), 50.0);
    /// assert_eq!(EURO_DENOMINATIONS[11].major_value(), 0.01);
    /// ```
    #[inline]
    pub fn major_value(&self) -> f64 {
        self.minor_value.to_major()
    }

    #[inline]
    pub const fn kind(&self) -> DenominationKind {
        self.kind
    }
}

/// Euro denominations in descending order, from €50 down to €0.01.
///
/// Process-wide, immutable. Being a `const`, it is shared by every call
/// without locking.
pub const EURO_DENOMINATIONS: [Denomination; 12] = [
    Denomination::bill(5000),
    Denomination::bill(2000),
    Denomination::bill(1000),
    Denomination::bill(500),
    Denomination::coin(200),
    Denomination::coin(100),
    Denomination::coin(50),
    Denomination::coin(20),
    Denomination::coin(10),
    Denomination::coin(5),
    Denomination::coin(2),
    Denomination::coin(1),
];

// =============================================================================
// Unit Tests
// =============================================================================
