//! # Currency Formatting
//!
//! Renders euro amounts the way an Italian till shows them.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │   1234.5   ──►   1.234,50 €                   │
//! │                  │     │  │                   │
//! │                  │     │  └─ trailing symbol  │
//! │                  │     └──── decimal comma    │
//! │                  └────────── thousands dot    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The symbol is separated by a non-breaking space so it never wraps
//! away from the number.

use crate::money::Money;
use crate::MINOR_UNITS_PER_MAJOR;

/// Thousands separator for the `it-IT` locale.
pub const GROUP_SEPARATOR: char = '.';

/// Decimal separator for the `it-IT` locale.
pub const DECIMAL_SEPARATOR: char = ',';

/// Currency symbol, always placed after the amount.
pub const CURRENCY_SYMBOL: char = '€';

/// Space between amount and symbol (U+00A0).
pub const SYMBOL_SPACING: char = '\u{a0}';

/// Formats a major-unit amount as an Italian euro string with exactly two
/// fractional digits.
///
/// ## Example
/// ```rust
/// use resto_core::format_currency;
///
/// assert_eq!(format_currency(0.70), "0,70\u{a0}€");
/// assert_eq!(format_currency(1234.5), "1.234,50\u{a0}€");
/// assert_eq!(format_currency(-37.5), "-37,50\u{a0}€");
/// ```
///
/// ## Rules
/// - Rounds to the nearest cent (half away from zero)
/// - Negative values get a leading `-`; a value that rounds to zero has no sign
/// - Never panics: `NaN` and infinities are rendered, not rejected
/// - Amounts too large for exact cents are printed from the float itself,
///   so the magnitude is always right
///
/// ```rust
/// use resto_core::format_currency;
///
/// assert_eq!(format_currency(1e20), "100.000.000.000.000.000.000,00\u{a0}€");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("NaN{}{}", SYMBOL_SPACING, CURRENCY_SYMBOL);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}∞{}{}", sign, SYMBOL_SPACING, CURRENCY_SYMBOL);
    }

    let cents = (amount * MINOR_UNITS_PER_MAJOR as f64).round();
    if cents.abs() < MAX_EXACT_CENTS {
        return Money::from_major(amount).to_string();
    }

    // `{:.2}` prints the full decimal expansion, never an exponent.
    let digits = format!("{:.2}", amount.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    compose(amount < 0.0, whole, fraction)
}

/// Largest cent count an `f64` holds exactly (2^53).
const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// Assembles sign, grouped whole part, fraction and symbol.
pub(crate) fn compose(negative: bool, whole: &str, fraction: &str) -> String {
    format!(
        "{}{}{}{}{}{}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        DECIMAL_SEPARATOR,
        fraction,
        SYMBOL_SPACING,
        CURRENCY_SYMBOL
    )
}

/// Inserts a group separator every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}
