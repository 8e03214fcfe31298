//! # Output Rendering
//!
//! Writes command results to any `Write` sink, as Italian text or JSON.
//!
//! ## Text Layout
//! ```text
//! Resto da Dare: 37,50 €
//! Dettaglio Resto:
//!   20,00 € Banconote  ×1
//!   10,00 € Banconote  ×1
//!    5,00 € Banconote  ×1
//!    2,00 € Monete     ×1
//!    0,50 € Monete     ×1
//! ```

use std::io::Write;

use resto_core::{format_currency, ChangeBreakdownEntry, ChangeCalculation, DenominationKind};
use serde::Serialize;
use serde_json::json;

use crate::commands::denomination::DenominationView;
use crate::commands::format::FormattedAmount;
use crate::error::{ApiError, TillResult};
use crate::state::{CalculatorState, OutputFormat};

/// Plural label used next to each breakdown line.
fn kind_label(kind: DenominationKind) -> &'static str {
    match kind {
        DenominationKind::Bill => "Banconote",
        DenominationKind::Coin => "Monete",
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> TillResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_breakdown<W: Write>(
    out: &mut W,
    change_due: f64,
    breakdown: &[ChangeBreakdownEntry],
) -> TillResult<()> {
    writeln!(out, "Resto da Dare: {}", format_currency(change_due))?;

    if breakdown.is_empty() {
        writeln!(out, "Nessun resto da dare")?;
        return Ok(());
    }

    writeln!(out, "Dettaglio Resto:")?;
    for entry in breakdown {
        writeln!(
            out,
            "  {:>10} {:<10} ×{}",
            format_currency(entry.denomination),
            kind_label(entry.kind),
            entry.count
        )?;
    }
    Ok(())
}

/// Writes a successful calculation.
pub fn calculation<W: Write>(
    out: &mut W,
    calculation: &ChangeCalculation,
    format: OutputFormat,
) -> TillResult<()> {
    match format {
        OutputFormat::Json => write_json(out, calculation),
        OutputFormat::Text => write_breakdown(out, calculation.change_due, &calculation.breakdown),
    }
}

/// Writes a command error.
pub fn error<W: Write>(out: &mut W, error: &ApiError, format: OutputFormat) -> TillResult<()> {
    match format {
        OutputFormat::Json => write_json(out, &json!({ "error": error })),
        OutputFormat::Text => {
            writeln!(out, "Errore: {}", error.message)?;
            Ok(())
        }
    }
}

/// Writes the whole calculator form.
pub fn state<W: Write>(out: &mut W, state: &CalculatorState, format: OutputFormat) -> TillResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, state);
    }

    writeln!(out, "Totale Conto (€): {}", state.input.bill_total)?;
    writeln!(out, "Contante Ricevuto (€): {}", state.input.cash_received)?;

    if let Some(err) = &state.error {
        writeln!(out, "Errore: {}", err.message)?;
    } else if !state.breakdown.is_empty() {
        write_breakdown(out, state.change_due, &state.breakdown)?;
    }
    Ok(())
}

/// Writes the denomination table.
pub fn denominations<W: Write>(
    out: &mut W,
    views: &[DenominationView],
    format: OutputFormat,
) -> TillResult<()> {
    if format == OutputFormat::Json {
        return write_json(out, views);
    }

    for view in views {
        writeln!(out, "{:>10} {}", view.label, kind_label(view.kind))?;
    }
    Ok(())
}

/// Writes a formatted amount.
pub fn formatted<W: Write>(
    out: &mut W,
    formatted: &FormattedAmount,
    format: OutputFormat,
) -> TillResult<()> {
    match format {
        OutputFormat::Json => write_json(out, formatted),
        OutputFormat::Text => {
            writeln!(out, "{}", formatted.formatted)?;
            Ok(())
        }
    }
}

/// Writes the session command list.
pub fn help<W: Write>(out: &mut W, text: &str, format: OutputFormat) -> TillResult<()> {
    match format {
        OutputFormat::Json => {
            let commands: Vec<&str> = text.lines().skip(1).map(str::trim).collect();
            write_json(out, &json!({ "help": commands }))
        }
        OutputFormat::Text => {
            writeln!(out, "{}", text)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::calculator::calculate_once;

    fn render_text<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> TillResult<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_calculation_text() {
        let calc = calculate_once("4,30", "5").unwrap();
        let text = render_text(|out| calculation(out, &calc, OutputFormat::Text));

        assert!(text.starts_with("Resto da Dare: 0,70\u{a0}€\n"));
        assert!(text.contains("Dettaglio Resto:"));
        assert!(text.contains("0,50\u{a0}€ Monete"));
        assert!(text.contains("0,20\u{a0}€ Monete"));
    }

    #[test]
    fn test_exact_payment_text() {
        let calc = calculate_once("5", "5").unwrap();
        let text = render_text(|out| calculation(out, &calc, OutputFormat::Text));

        assert!(text.contains("Nessun resto da dare"));
        assert!(!text.contains("Dettaglio Resto"));
    }

    #[test]
    fn test_calculation_json() {
        let calc = calculate_once("17", "20").unwrap();
        let text = render_text(|out| calculation(out, &calc, OutputFormat::Json));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["changeDue"], 3.0);
        assert_eq!(json["breakdown"][0]["denomination"], 2.0);
        assert_eq!(json["breakdown"][0]["type"], "coin");
    }

    #[test]
    fn test_error_json() {
        let err = calculate_once("20", "17").unwrap_err();
        let text = render_text(|out| error(out, &err, OutputFormat::Json));
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["error"]["code"], "INSUFFICIENT_CASH");
    }

    #[test]
    fn test_help_json_is_one_document() {
        let commands = "Comandi:\n  calcola   calcola il resto\n  esci   termina";
        let text = render_text(|out| help(out, commands, OutputFormat::Json));
        assert_eq!(text.lines().count(), 1);

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["help"][0], "calcola   calcola il resto");
        assert_eq!(json["help"][1], "esci   termina");
    }

    #[test]
    fn test_bills_labelled() {
        let calc = calculate_once("12,50", "50").unwrap();
        let text = render_text(|out| calculation(out, &calc, OutputFormat::Text));

        assert!(text.contains("20,00\u{a0}€ Banconote"));
        assert!(text.contains("2,00\u{a0}€ Monete"));
    }
}
