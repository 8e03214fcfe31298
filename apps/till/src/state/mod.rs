//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │   CalculatorState        │      │   TillConfig             │        │
//! │  │                          │      │                          │        │
//! │  │  bill_total / cash text  │      │  store_name              │        │
//! │  │  change_due, breakdown   │      │  output (text | json)    │        │
//! │  │  error                   │      │  log_filter              │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │                                                                         │
//! │  • CalculatorState: mutable, owned by one session, never shared        │
//! │  • TillConfig: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorState;
pub use config::{OutputFormat, TillConfig, DEFAULT_LOG_FILTER};
