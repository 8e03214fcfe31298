//! # Format Commands

use resto_core::{format_currency, CURRENCY_CODE};
use serde::Serialize;
use tracing::debug;

/// An amount and its Italian rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAmount {
    pub amount: f64,
    pub currency: &'static str,
    pub formatted: String,
}

/// Formats any amount, negative values included.
pub fn format_amount(amount: f64) -> FormattedAmount {
    debug!(amount, "format_amount command");
    FormattedAmount {
        amount,
        currency: CURRENCY_CODE,
        formatted: format_currency(amount),
    }
}
