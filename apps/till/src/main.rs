//! # Resto Till Entry Point
//!
//! ## Startup Sequence
//! 1. Load `.env` (if present)
//! 2. Parse the command line
//! 3. Load configuration from the environment
//! 4. Initialize tracing (logging to stderr)
//! 5. Run a one-shot command or the interactive session

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    resto_till::run()
}
