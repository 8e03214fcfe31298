//! # Calculator State
//!
//! The form the cashier fills in: two amounts, plus whatever the last
//! calculation produced.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State Operations                          │
//! │                                                                         │
//! │  Cashier Action           Command                 State Change          │
//! │  ──────────────           ───────                 ────────────          │
//! │                                                                         │
//! │  totale 12,50 ───────────► set_amount() ────────► bill_total = "12.50"  │
//! │                                                   error = None          │
//! │                                                                         │
//! │  calcola (ok) ───────────► calculate() ─────────► change_due, breakdown │
//! │                                                                         │
//! │  calcola (fails) ────────► calculate() ─────────► error = Some(..)      │
//! │                                                   breakdown cleared     │
//! │                                                                         │
//! │  reset ──────────────────► reset() ─────────────► everything initial    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The state is owned by the session loop that drives it; the engine in
//! `resto-core` stays stateless.

use resto_core::{
    normalize_amount, AmountField, CalculationInput, ChangeBreakdownEntry, ChangeCalculation,
};
use serde::Serialize;

use crate::error::ApiError;

/// Form state of one calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Sanitized texts as entered.
    #[serde(flatten)]
    pub input: CalculationInput,

    /// Change due from the last successful calculation.
    pub change_due: f64,

    /// Breakdown from the last successful calculation.
    pub breakdown: Vec<ChangeBreakdownEntry>,

    /// Error from the last failed calculation.
    pub error: Option<ApiError>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a sanitized amount and clears any shown error.
    pub fn set_amount(&mut self, field: AmountField, raw: &str) {
        let sanitized = normalize_amount(raw);
        match field {
            AmountField::BillTotal => self.input.bill_total = sanitized,
            AmountField::CashReceived => self.input.cash_received = sanitized,
        }
        self.error = None;
    }

    /// Both amounts have been entered.
    pub fn can_calculate(&self) -> bool {
        self.input.is_complete()
    }

    /// Shows a successful result.
    pub fn show(&mut self, calculation: &ChangeCalculation) {
        self.change_due = calculation.change_due;
        self.breakdown = calculation.breakdown.clone();
        self.error = None;
    }

    /// Shows an error. The previous breakdown is hidden, never left stale.
    pub fn fail(&mut self, error: ApiError) {
        self.change_due = 0.0;
        self.breakdown.clear();
        self.error = Some(error);
    }

    /// Clears every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resto_core::ValidationError;

    #[test]
    fn test_set_amount_sanitizes_and_clears_error() {
        let mut state = CalculatorState::new();
        state.fail(ApiError::from(ValidationError::NonPositiveTotal));

        state.set_amount(AmountField::BillTotal, "€ 12,50");
        assert_eq!(state.input.bill_total, "12.50");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_can_calculate_needs_both_amounts() {
        let mut state = CalculatorState::new();
        assert!(!state.can_calculate());

        state.set_amount(AmountField::BillTotal, "4,30");
        assert!(!state.can_calculate());

        state.set_amount(AmountField::CashReceived, "5");
        assert!(state.can_calculate());
    }

    #[test]
    fn test_fail_hides_previous_breakdown() {
        let mut state = CalculatorState::new();
        let calculation = resto_core::calculate("4.30", "5").unwrap();
        state.show(&calculation);
        assert_eq!(state.breakdown.len(), 2);

        state.fail(ApiError::from(ValidationError::NonPositiveTotal));
        assert!(state.breakdown.is_empty());
        assert_eq!(state.change_due, 0.0);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = CalculatorState::new();
        state.set_amount(AmountField::BillTotal, "4,30");
        state.set_amount(AmountField::CashReceived, "5");
        state.show(&resto_core::calculate("4.30", "5").unwrap());

        state.reset();
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let mut state = CalculatorState::new();
        state.set_amount(AmountField::BillTotal, "4,30");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["billTotal"], "4.30");
        assert_eq!(json["cashReceived"], "");
        assert!(json["error"].is_null());
    }
}
