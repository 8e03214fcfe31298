//! # Denomination Commands
//!
//! Read-only view of the notes and coins the till hands back.

use resto_core::{format_currency, DenominationKind, Money, EURO_DENOMINATIONS};
use serde::Serialize;
use tracing::debug;

/// One row of the denomination listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationView {
    /// Value in cents
    pub minor_value: Money,

    /// Value in euros
    pub value: f64,

    #[serde(rename = "type")]
    pub kind: DenominationKind,

    /// Formatted value, e.g. "0,50 €"
    pub label: String,
}

/// Lists every denomination, highest first.
pub fn list_denominations() -> Vec<DenominationView> {
    debug!("list_denominations command");
    EURO_DENOMINATIONS
        .iter()
        .map(|d| DenominationView {
            minor_value: d.minor_value(),
            value: d.major_value(),
            kind: d.kind(),
            label: format_currency(d.major_value()),
        })
        .collect()
}
