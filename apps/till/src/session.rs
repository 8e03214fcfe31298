//! # Interactive Session
//!
//! A line-oriented version of the calculator form.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  totale <importo>     set the bill total          (totale 12,50)        │
//! │  contante <importo>   set the cash received       (contante 50)         │
//! │  calcola              compute the change                                │
//! │  stato                show the form                                     │
//! │  reset                clear everything                                  │
//! │  aiuto                list commands                                     │
//! │  esci                 quit (end of input works too)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors from a command are shown and the session continues; only I/O
//! failures end it.

use std::io::{BufRead, Write};
use std::str::FromStr;

use resto_core::AmountField;
use tracing::{debug, info};

use crate::commands::calculator;
use crate::error::{ApiError, TillResult};
use crate::render;
use crate::state::{CalculatorState, OutputFormat, TillConfig};

const HELP: &str = "\
Comandi:
  totale <importo>     imposta il totale del conto
  contante <importo>   imposta il contante ricevuto
  calcola              calcola il resto
  stato                mostra i valori inseriti
  reset                azzera tutto
  esci                 termina";

/// A parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    SetAmount { field: AmountField, raw: String },
    Calculate,
    Show,
    Reset,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "totale" => Ok(SessionCommand::SetAmount {
                field: AmountField::BillTotal,
                raw: rest.to_string(),
            }),
            "contante" => Ok(SessionCommand::SetAmount {
                field: AmountField::CashReceived,
                raw: rest.to_string(),
            }),
            "calcola" => Ok(SessionCommand::Calculate),
            "stato" => Ok(SessionCommand::Show),
            "reset" => Ok(SessionCommand::Reset),
            "aiuto" | "?" => Ok(SessionCommand::Help),
            "esci" => Ok(SessionCommand::Quit),
            _ => Err(ApiError::invalid_command(word)),
        }
    }
}

/// Runs the session until `esci` or end of input.
pub fn run<R, W>(input: R, out: &mut W, config: &TillConfig, format: OutputFormat) -> TillResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut state = CalculatorState::new();
    let interactive = format == OutputFormat::Text;

    info!(store = %config.store_name, "session started");
    if interactive {
        writeln!(out, "{} - Calcolatore di Resto", config.store_name)?;
        writeln!(out, "Digita \"aiuto\" per l'elenco dei comandi.")?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                render::error(out, &err, format)?;
                continue;
            }
        };
        debug!(?command, "session command");

        match command {
            SessionCommand::SetAmount { field, raw } => {
                calculator::set_amount(&mut state, field, &raw);
            }
            SessionCommand::Calculate => match calculator::calculate(&mut state) {
                Ok(calculation) => render::calculation(out, &calculation, format)?,
                Err(err) => render::error(out, &err, format)?,
            },
            SessionCommand::Show => render::state(out, &state, format)?,
            SessionCommand::Reset => calculator::reset(&mut state),
            SessionCommand::Help => render::help(out, HELP, format)?,
            SessionCommand::Quit => break,
        }
        out.flush()?;
    }

    info!("session ended");
    Ok(())
}
