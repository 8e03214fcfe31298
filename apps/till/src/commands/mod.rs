//! # Commands Module
//!
//! Everything the till can be asked to do, independent of how the request
//! arrived (command line or interactive session).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── calculator.rs    ◄─── set_amount, calculate, reset, calculate_once
//! ├── denomination.rs  ◄─── list_denominations
//! └── format.rs        ◄─── format_amount
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resto calc 4,30 5          "calcola" in a session                      │
//! │         │                            │                                  │
//! │         ▼                            ▼                                  │
//! │  calculate_once(..)          calculate(&mut state)                      │
//! │         │                            │                                  │
//! │         └──────────┬─────────────────┘                                  │
//! │                    ▼                                                    │
//! │         Result<ChangeCalculation, ApiError>                             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │         render (text | json) ──► stdout                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculator;
pub mod denomination;
pub mod format;
