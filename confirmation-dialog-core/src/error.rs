//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Dialog layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DialogError {
    /// Confirmer name contains characters outside `[A-Za-z_]`
    #[error("Confirmation control name contains invalid characters: {0:?}")]
    InvalidName(String),

    /// Confirmer registered twice under the same name
    #[error("Confirmation control \"{0}\" is already configured")]
    AlreadyConfigured(String),

    /// No confirmer was ever created under this name
    #[error("Confirmer \"{0}\" does not exist")]
    NotFound(String),

    /// Confirmer exists but handler/question/heading were never set
    #[error("Confirmation control \"{0}\" is not configured")]
    NotConfigured(String),

    /// Signal decoded to a confirmer that cannot be shown
    #[error("Invalid confirmation control: {0:?}")]
    InvalidSignalTarget(String),

    /// No template available at render time
    #[error("Dialog control is without template: {0}")]
    MissingTemplate(String),

    /// Confirm/cancel received while nothing (or something else) is displayed
    #[error("No active confirmation for \"{0}\"")]
    NoActiveConfirmation(String),

    /// Confirm/cancel token does not match the displayed confirmation
    #[error("Confirmation token mismatch for \"{0}\"")]
    InvalidToken(String),

    /// Confirmation handler reported a failure
    #[error("Confirmation handler failed: {name} - {message}")]
    HandlerFailed { name: String, message: String },

    /// Session storage error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl DialogError {
    /// Whether the error stems from a malformed or stale request rather than misconfiguration.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound(_)
            | Self::NotConfigured(_)
            | Self::InvalidSignalTarget(_)
            | Self::NoActiveConfirmation(_)
            | Self::InvalidToken(_) => true,
            Self::InvalidName(_)
            | Self::AlreadyConfigured(_)
            | Self::MissingTemplate(_)
            | Self::HandlerFailed { .. }
            | Self::StorageError(_)
            | Self::SerializationError(_)
            | Self::ConfigError(_)
            | Self::ValidationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for DialogError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Dialog layer Result type alias
pub type DialogResult<T> = std::result::Result<T, DialogError>;
