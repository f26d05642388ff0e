//! Error types for the sales dashboard core library.
//!
//! Every failure the dashboard can observe is one of a small set of coded
//! variants so that log lines and CLI output stay greppable.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Gateway | Transport, timeout, HTTP status, and decode errors |
//! | E2001-E2099 | Config | Config file, environment, and validation errors |
//! | E9001-E9099 | General | Input presence checks and local IO errors |

use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

/// The main error type for the sales dashboard core library.
#[derive(Debug, Error)]
pub enum SalesDashError {
    // ========================================================================
    // Gateway Errors (E1001-E1099)
    // ========================================================================
    /// The request could not be sent or the connection failed
    #[error("[E1001] Request failed: {0}")]
    Transport(String),

    /// The transport gave up waiting for the remote service. `FetchGateway::new`
    /// sets no timeout; only a client handed to `FetchGateway::with_client`
    /// with one configured produces this.
    #[error("[E1002] Request timed out: {0}")]
    Timeout(String),

    /// The remote service answered with a non-success status
    #[error("[E1003] HTTP error! status: {status} ({url})")]
    HttpStatus { status: u16, url: String },

    /// The response body was not the JSON we expected
    #[error("[E1004] Failed to decode response: {0}")]
    Decode(String),

    // ========================================================================
    // Configuration Errors (E2001-E2099)
    // ========================================================================
    /// Configuration file or environment could not be parsed
    #[error("[E2001] Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// A configuration value failed validation
    #[error("[E2002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    /// The question text was empty
    #[error("[E9001] Question must not be empty")]
    EmptyQuestion,

    /// Local IO failure
    #[error("[E9002] IO error: {0}")]
    Io(String),
}

pub type SalesDashResult<T> = Result<T, SalesDashError>;

impl From<reqwest::Error> for SalesDashError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SalesDashError::Timeout(err.to_string())
        } else if err.is_status() {
            SalesDashError::HttpStatus {
                status: err.status().map(|s| s.as_u16()).unwrap_or_default(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            SalesDashError::Decode(err.to_string())
        } else {
            SalesDashError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SalesDashError {
    fn from(err: serde_json::Error) -> Self {
        SalesDashError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for SalesDashError {
    fn from(err: std::io::Error) -> Self {
        SalesDashError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for SalesDashError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => SalesDashError::InvalidConfigValue {
                key,
                message: "Key not found".to_string(),
            },
            config::ConfigError::FileParse { uri, cause } => SalesDashError::ConfigParse(
                format!("Failed to parse {}: {}", uri.unwrap_or_default(), cause),
            ),
            config::ConfigError::Type {
                origin,
                unexpected,
                expected,
                key,
            } => SalesDashError::InvalidConfigValue {
                key: key.unwrap_or_else(|| origin.map(|o| o.to_string()).unwrap_or_default()),
                message: format!("Expected {}, got {}", expected, unexpected),
            },
            _ => SalesDashError::ConfigParse(err.to_string()),
        }
    }
}

impl SalesDashError {
    /// Returns true if this error came from talking to a remote endpoint.
    pub fn is_gateway_error(&self) -> bool {
        matches!(
            self,
            SalesDashError::Transport(_)
                | SalesDashError::Timeout(_)
                | SalesDashError::HttpStatus { .. }
                | SalesDashError::Decode(_)
        )
    }

    /// Returns true if this error is related to configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SalesDashError::ConfigParse(_) | SalesDashError::InvalidConfigValue { .. }
        )
    }

    /// Returns true if the remote side may simply be unavailable right now.
    pub fn is_transient(&self) -> bool {
        match self {
            SalesDashError::Transport(_) | SalesDashError::Timeout(_) => true,
            SalesDashError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SalesDashError::Transport(_) => "E1001",
            SalesDashError::Timeout(_) => "E1002",
            SalesDashError::HttpStatus { .. } => "E1003",
            SalesDashError::Decode(_) => "E1004",
            SalesDashError::ConfigParse(_) => "E2001",
            SalesDashError::InvalidConfigValue { .. } => "E2002",
            SalesDashError::EmptyQuestion => "E9001",
            SalesDashError::Io(_) => "E9002",
        }
    }

    /// Returns a user-friendly suggestion for how to resolve this error.
    pub fn user_suggestion(&self) -> Option<&'static str> {
        match self {
            SalesDashError::Transport(_) | SalesDashError::Timeout(_) => {
                Some("Check that the sales backend is running and reachable")
            }
            SalesDashError::HttpStatus { .. } => {
                Some("The backend answered with an error; check its logs")
            }
            SalesDashError::Decode(_) => {
                Some("Check that the configured URL points at the sales API")
            }
            SalesDashError::ConfigParse(_) | SalesDashError::InvalidConfigValue { .. } => {
                Some("Run 'salesdash config' to inspect the effective configuration")
            }
            SalesDashError::EmptyQuestion => Some("Type a question before asking"),
            SalesDashError::Io(_) => None,
        }
    }

    /// Log this error with appropriate severity level.
    pub fn log(&self) {
        let code = self.error_code();
        let suggestion = self.user_suggestion();

        if self.is_transient() {
            warn!(
                error_code = %code,
                suggestion = suggestion,
                "Transient error occurred: {}",
                self
            );
        } else {
            error!(
                error_code = %code,
                suggestion = suggestion,
                "Error occurred: {}",
                self
            );
        }
    }
}

// ============================================================================
// User-friendly error formatting for CLI
// ============================================================================

/// Format an error for CLI display with its suggestion.
pub struct CliErrorDisplay<'a> {
    error: &'a SalesDashError,
    show_suggestion: bool,
}

impl<'a> CliErrorDisplay<'a> {
    pub fn new(error: &'a SalesDashError) -> Self {
        Self {
            error,
            show_suggestion: true,
        }
    }

    pub fn without_suggestion(mut self) -> Self {
        self.show_suggestion = false;
        self
    }
}

impl<'a> fmt::Display for CliErrorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.error)?;

        if self.show_suggestion {
            if let Some(suggestion) = self.error.user_suggestion() {
                writeln!(f)?;
                writeln!(f, "  Suggestion: {}", suggestion)?;
            }
        }

        Ok(())
    }
}
