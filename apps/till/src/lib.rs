//! # Resto Till Library
//!
//! Terminal front-end for the change engine. This is the "form" side of
//! the calculator: it collects the two amounts, calls `resto-core`, and
//! shows either the breakdown or a localized error.
//!
//! ## Module Organization
//! ```text
//! resto_till/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap definition
//! ├── session.rs      ◄─── interactive totale/contante/calcola loop
//! ├── render.rs       ◄─── text / JSON output
//! ├── state/
//! │   ├── calculator.rs ◄─ CalculatorState (form state)
//! │   └── config.rs     ◄─ TillConfig (env + defaults)
//! ├── commands/
//! │   ├── calculator.rs   ◄─ set_amount, calculate, reset
//! │   ├── denomination.rs ◄─ list_denominations
//! │   └── format.rs       ◄─ format_amount
//! └── error.rs        ◄─── ApiError / TillError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod session;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::{calculator, denomination, format};
use error::TillResult;
use state::{OutputFormat, TillConfig};

/// Runs the till.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Till Startup                                      │
/// │                                                                         │
/// │  1. Load .env ────────────────────────────────────────────────────────► │
/// │     • Missing file is fine                                              │
/// │                                                                         │
/// │  2. Parse command line ───────────────────────────────────────────────► │
/// │     • calc / format / denominations, or none for a session              │
/// │                                                                         │
/// │  3. Load TillConfig ──────────────────────────────────────────────────► │
/// │     • RESTO_STORE_NAME, RESTO_OUTPUT, RESTO_LOG                         │
/// │                                                                         │
/// │  4. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG overrides RESTO_LOG                                      │
/// │                                                                         │
/// │  5. Execute ──────────────────────────────────────────────────────────► │
/// │     • stdout receives results only                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match TillConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("resto: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Resto till");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(cli, &config, stdin.lock(), &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "till stopped");
            eprintln!("resto: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Executes a parsed command line against the given input and output.
///
/// Returns `Ok(false)` when the command ran but was refused (for example
/// insufficient cash), so the process can exit non-zero.
pub fn execute<R, W>(cli: Cli, config: &TillConfig, input: R, out: &mut W) -> TillResult<bool>
where
    R: BufRead,
    W: Write,
{
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    let succeeded = match cli.command {
        Some(Command::Calc {
            bill_total,
            cash_received,
        }) => match calculator::calculate_once(&bill_total, &cash_received) {
            Ok(calculation) => {
                render::calculation(out, &calculation, output)?;
                true
            }
            Err(err) => {
                render::error(out, &err, output)?;
                false
            }
        },
        Some(Command::Format { amount }) => {
            render::formatted(out, &format::format_amount(amount), output)?;
            true
        }
        Some(Command::Denominations) => {
            render::denominations(out, &denomination::list_denominations(), output)?;
            true
        }
        None => {
            session::run(input, out, config, output)?;
            true
        }
    };

    out.flush()?;
    Ok(succeeded)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RESTO_LOG=warn` - Quieter default when RUST_LOG is unset
/// - Default: `info,resto=debug`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
