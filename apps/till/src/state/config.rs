//! # Configuration State
//!
//! Till configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--json`)
//! 2. Environment variables (`RESTO_*`)
//! 3. `.env` file in the working directory (loaded into the environment)
//! 4. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{TillError, TillResult};

/// Default tracing filter when neither `RESTO_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,resto=debug";

/// Till configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TillConfig {
    /// Store name shown in the session banner
    pub store_name: String,

    /// How results are printed
    pub output: OutputFormat,

    /// tracing `EnvFilter` directive
    pub log_filter: String,
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable Italian text
    #[default]
    Text,

    /// One JSON document per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl Default for TillConfig {
    /// ## Default Values
    /// - Store: "Coffee Break"
    /// - Output: text
    /// - Logging: `info,resto=debug`
    fn default() -> Self {
        TillConfig {
            store_name: "Coffee Break".to_string(),
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TillConfig {
    /// Creates a TillConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RESTO_STORE_NAME`: Override store name
    /// - `RESTO_OUTPUT`: `text` or `json`
    /// - `RESTO_LOG`: tracing filter (`RUST_LOG` still wins at subscriber init)
    pub fn from_env() -> TillResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> TillResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = TillConfig::default();

        if let Some(store_name) = lookup("RESTO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(output) = lookup("RESTO_OUTPUT") {
            config.output = output.parse().map_err(|_| TillError::InvalidConfig {
                key: "RESTO_OUTPUT",
                value: output.clone(),
            })?;
        }

        if let Some(filter) = lookup("RESTO_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
