//! Application error handling
//!
//! This module provides unified error handling for the tracker services,
//! mapping domain and storage failures to a stable error code the
//! presentation layer can act on.

use calorie_tracker_shared::AppError;
use thiserror::Error;
use tracing::error;

/// Error type returned by every service operation
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("No user profile is registered")]
    NotRegistered,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Stored value under '{key}' is corrupt")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error")]
    Storage(#[from] anyhow::Error),
}

impl TrackerError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            TrackerError::NotRegistered => "NOT_REGISTERED",
            TrackerError::Validation(_) => "VALIDATION_ERROR",
            TrackerError::NotFound(_) => "NOT_FOUND",
            TrackerError::Corrupt { .. } => "CORRUPT_DATA",
            TrackerError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether the caller should send the user back to registration
    pub fn requires_registration(&self) -> bool {
        matches!(self, TrackerError::NotRegistered)
    }

    /// Message safe to show to the user. Storage details are logged, not shown.
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Validation(msg) | TrackerError::NotFound(msg) => msg.clone(),
            TrackerError::NotRegistered => "Please register to continue".to_string(),
            TrackerError::Corrupt { key, source } => {
                error!(key = %key, "Corrupt stored value: {}", source);
                "Saved data could not be read".to_string()
            }
            TrackerError::Storage(err) => {
                error!("Storage error: {:?}", err);
                "Data could not be saved or loaded".to_string()
            }
        }
    }
}

impl From<AppError> for TrackerError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => TrackerError::Validation(msg),
            AppError::Catalog(msg) => TrackerError::Storage(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type alias for service operations
pub type TrackerResult<T> = Result<T, TrackerError>;
