//! Property tests for the change engine.
//!
//! Amounts are generated in whole cents (or thousandths, for rounding) and
//! rendered as text the way a cashier would type them (sometimes with a
//! decimal comma), so every
//! property goes through the full normalize → parse → validate → decompose
//! path.

use proptest::prelude::*;

use resto_core::{
    calculate, calculate_change, decompose, format_currency, Money, ValidationError,
    EURO_DENOMINATIONS,
};

// =============================================================================
// Strategies
// =============================================================================

/// Renders cents as `"12.34"` or `"12,34"`.
fn typed(cents: i64, decimal_comma: bool) -> String {
    let separator = if decimal_comma { ',' } else { '.' };
    format!("{}{}{:02}", cents / 100, separator, cents % 100)
}

/// A bill total and an amount tendered that covers it, both in cents.
fn valid_payment() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=1_000_000).prop_flat_map(|bill| (Just(bill), bill..=bill + 100_000))
}

/// Renders thousandths of a euro as `"4.304"`, finer than any coin.
fn typed_mills(mills: i64) -> String {
    format!("{}.{:03}", mills / 1000, mills % 1000)
}

/// Like `valid_payment`, but in thousandths so amounts fall between cents.
fn sub_cent_payment() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=10_000_000).prop_flat_map(|bill| (Just(bill), bill..=bill + 1_000_000))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The breakdown always adds up to the change due, to the cent.
    #[test]
    fn prop_breakdown_sums_to_change_due(
        (bill, cash) in valid_payment(),
        comma in any::<bool>(),
    ) {
        let result = calculate(&typed(bill, comma), &typed(cash, !comma)).unwrap();

        let expected = Money::from_cents(cash - bill);
        prop_assert_eq!(result.change_due_cents, expected);
        prop_assert_eq!(result.breakdown_total(), expected);

        let float_sum: f64 = result
            .breakdown
            .iter()
            .map(|e| e.denomination * e.count as f64)
            .sum();
        prop_assert_eq!(Money::from_major(float_sum), expected);
    }

    /// Sub-cent inputs are rounded to the nearest cent once, and the
    /// breakdown covers exactly that rounded amount.
    #[test]
    fn prop_sub_cent_change_is_rounded((bill, cash) in sub_cent_payment()) {
        let (bill_text, cash_text) = (typed_mills(bill), typed_mills(cash));
        let result = calculate(&bill_text, &cash_text).unwrap();

        let bill_major: f64 = bill_text.parse().unwrap();
        let cash_major: f64 = cash_text.parse().unwrap();
        let expected = ((cash_major - bill_major) * 100.0).round() as i64;
        prop_assert_eq!(result.change_due_cents.cents(), expected);
        prop_assert_eq!(result.breakdown_total(), result.change_due_cents);

        // never more than half a cent away from the exact difference
        let off_by_mills = (result.change_due_cents.cents() * 10 - (cash - bill)).abs();
        prop_assert!(off_by_mills <= 5);
    }

    /// No line ever has a zero count.
    #[test]
    fn prop_no_zero_counts((bill, cash) in valid_payment()) {
        let result = calculate(&typed(bill, false), &typed(cash, false)).unwrap();
        prop_assert!(result.breakdown.iter().all(|e| e.count > 0));
    }

    /// Lines are strictly descending, so no denomination appears twice.
    #[test]
    fn prop_strictly_descending((bill, cash) in valid_payment()) {
        let result = calculate(&typed(bill, false), &typed(cash, false)).unwrap();
        for pair in result.breakdown.windows(2) {
            prop_assert!(pair[0].denomination > pair[1].denomination);
        }
    }

    /// Greedy is optimal for the Euro series: below each denomination the
    /// leftover is smaller than that denomination.
    #[test]
    fn prop_greedy_leaves_nothing_reusable(cents in 0i64..10_000_000) {
        let breakdown = decompose(Money::from_cents(cents));
        let mut remaining = cents;
        for denomination in EURO_DENOMINATIONS.iter() {
            let value = denomination.minor_value().cents();
            let used = breakdown
                .iter()
                .find(|e| Money::from_major(e.denomination).cents() == value)
                .map_or(0, |e| e.count as i64);
            remaining -= used * value;
            prop_assert!(remaining < value);
        }
        prop_assert_eq!(remaining, 0);
    }

    /// Same inputs, same output.
    #[test]
    fn prop_idempotent((bill, cash) in valid_payment()) {
        let (bill, cash) = (typed(bill, true), typed(cash, false));
        prop_assert_eq!(calculate(&bill, &cash), calculate(&bill, &cash));
    }

    /// Exact payment gives no change and no error.
    #[test]
    fn prop_exact_payment_is_empty(bill in 1i64..=1_000_000) {
        let text = typed(bill, false);
        let result = calculate(&text, &text).unwrap();
        prop_assert!(result.breakdown.is_empty());
        prop_assert_eq!(result.change_due, 0.0);
    }

    /// Paying less than the bill is always refused.
    #[test]
    fn prop_insufficient_cash_rejected(
        bill in 2i64..=1_000_000,
        short in 1i64..=1_000,
    ) {
        let cash = (bill - short).max(0);
        let result = calculate(&typed(bill, false), &typed(cash, false));
        let is_insufficient = matches!(result, Err(ValidationError::InsufficientCash { .. }));
        prop_assert!(is_insufficient);
    }

    /// A zero bill total is always refused, whatever the cash.
    #[test]
    fn prop_zero_total_rejected(cash in 0i64..=1_000_000) {
        let result = calculate("0", &typed(cash, false));
        prop_assert_eq!(result, Err(ValidationError::NonPositiveTotal));
    }

    /// The unvalidated entry point agrees with the validated one.
    #[test]
    fn prop_calculate_change_agrees((bill, cash) in valid_payment()) {
        let validated = calculate(&typed(bill, false), &typed(cash, false)).unwrap();
        let direct = calculate_change(bill as f64 / 100.0, cash as f64 / 100.0);
        prop_assert_eq!(direct, validated.breakdown);
    }

    /// Formatting never panics and always ends with the euro sign.
    #[test]
    fn prop_format_always_has_symbol(amount in any::<f64>()) {
        prop_assert!(format_currency(amount).ends_with('€'));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_formatting_change_due() {
    let result = calculate("4,30", "5").unwrap();
    let formatted = format_currency(result.change_due);

    assert!(formatted.contains("0,70"));
    assert!(formatted.contains('€'));
}
