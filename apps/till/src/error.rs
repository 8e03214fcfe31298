//! # Error Types
//!
//! Unified error types for the till.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Till                               │
//! │                                                                         │
//! │  calcola                                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  ValidationError::InsufficientCash ──► ApiError {               │  │
//! │  │                                          code: INSUFFICIENT_CASH,│  │
//! │  │                                          message: "Il contante   │  │
//! │  │                                            ricevuto è ..." }     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ApiError    - recoverable, shown to the cashier, session continues    │
//! │  TillError   - terminal I/O or config failure, the process exits       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use resto_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Error returned from till commands.
///
/// ## Serialization
/// This is what `--json` output contains when a command fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_CASH",
///   "message": "Il contante ricevuto è insufficiente"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Localized message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// One of the amounts is not a number
    InvalidAmount,

    /// Bill total is zero or negative
    NonPositiveTotal,

    /// Cash received does not cover the bill
    InsufficientCash,

    /// An amount has not been entered yet
    MissingInput,

    /// Unknown or malformed session command
    InvalidCommand,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a missing input error.
    pub fn missing_input() -> Self {
        ApiError::new(
            ErrorCode::MissingInput,
            "Inserisci sia il totale che il contante ricevuto",
        )
    }

    /// Creates an invalid command error.
    pub fn invalid_command(command: &str) -> Self {
        ApiError::new(
            ErrorCode::InvalidCommand,
            format!("Comando sconosciuto: {} (digita \"aiuto\")", command),
        )
    }
}

/// Maps each validation failure to its cashier-facing message.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidAmount { .. } => {
                ApiError::new(ErrorCode::InvalidAmount, "Inserisci importi validi")
            }
            ValidationError::NonPositiveTotal => ApiError::new(
                ErrorCode::NonPositiveTotal,
                "Il totale deve essere maggiore di zero",
            ),
            ValidationError::InsufficientCash { .. } => ApiError::new(
                ErrorCode::InsufficientCash,
                "Il contante ricevuto è insufficiente",
            ),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Till Error
// =============================================================================

/// Failures that end the process.
#[derive(Debug, Error)]
pub enum TillError {
    /// An environment setting has a value the till does not understand.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    /// Reading commands or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// JSON output could not be encoded.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with TillError.
pub type TillResult<T> = Result<T, TillError>;
