//! Command line definition.

use clap::{Parser, Subcommand};

/// Calcolatore di resto per la cassa.
///
/// Without a subcommand an interactive session reads commands from stdin.
#[derive(Debug, Parser)]
#[command(name = "resto", version, about)]
pub struct Cli {
    /// Print results as JSON (overrides RESTO_OUTPUT)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the change for one payment
    Calc {
        /// Bill total, e.g. "12,50"
        bill_total: String,

        /// Cash handed over by the customer, e.g. "50"
        cash_received: String,
    },

    /// Format an amount the Italian way
    Format {
        /// Amount in euros (negative values allowed)
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// List the notes and coins used for change
    Denominations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from(["resto", "calc", "12,50", "50"]).unwrap();
        match cli.command {
            Some(Command::Calc {
                bill_total,
                cash_received,
            }) => {
                assert_eq!(bill_total, "12,50");
                assert_eq!(cash_received, "50");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_format_negative_with_json() {
        let cli = Cli::try_parse_from(["resto", "--json", "format", "-12.5"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Command::Format { amount }) if amount == -12.5));
    }

    #[test]
    fn test_no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["resto"]).unwrap();
        assert!(cli.command.is_none());
    }
}
