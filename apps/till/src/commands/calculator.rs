//! # Calculator Commands
//!
//! Commands that drive a [`CalculatorState`].
//!
//! ## Calculator Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Amounts  │────►│  Result  │────►│  Empty   │       │
//! │  │  Form    │     │ entered  │     │ or Error │     │  Form    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │              set_amount        calculate           reset               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use resto_core::{AmountField, CalculationInput, ChangeCalculation};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CalculatorState;

/// Enters one of the two amounts.
pub fn set_amount(state: &mut CalculatorState, field: AmountField, raw: &str) {
    state.set_amount(field, raw);
    debug!(%field, value = %raw, "set_amount command");
}

/// Computes change for the amounts currently in the form.
///
/// ## Behavior
/// - Refused with `MISSING_INPUT` while either amount is empty; the form
///   is left untouched
/// - On a validation failure the error is stored and the old breakdown
///   is cleared
/// - On success the result is stored and returned
pub fn calculate(state: &mut CalculatorState) -> Result<ChangeCalculation, ApiError> {
    if !state.can_calculate() {
        return Err(ApiError::missing_input());
    }

    match state.input.calculate() {
        Ok(calculation) => {
            debug!(
                change_due_cents = calculation.change_due_cents.cents(),
                pieces = calculation.piece_count(),
                "change calculated"
            );
            state.show(&calculation);
            Ok(calculation)
        }
        Err(err) => {
            debug!(error = %err, "calculation rejected");
            let api_error = ApiError::from(err);
            state.fail(api_error.clone());
            Err(api_error)
        }
    }
}

/// Clears the form.
pub fn reset(state: &mut CalculatorState) {
    debug!("reset command");
    state.reset();
}

/// One-shot calculation for the `calc` subcommand.
///
/// Runs through a throwaway [`CalculatorState`] so the inputs are sanitized
/// exactly as in the interactive session.
pub fn calculate_once(bill_total: &str, cash_received: &str) -> Result<ChangeCalculation, ApiError> {
    let mut state = CalculatorState::new();
    set_amount(&mut state, AmountField::BillTotal, bill_total);
    set_amount(&mut state, AmountField::CashReceived, cash_received);

    if !state.can_calculate() {
        // A one-shot call cannot be "not yet filled in": empty text is invalid.
        return CalculationInput::new(bill_total, cash_received)
            .calculate()
            .map_err(ApiError::from);
    }

    calculate(&mut state)
}
