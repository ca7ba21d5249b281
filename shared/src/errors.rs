//! Error types for the Calorie Tracker domain

use thiserror::Error;

/// Domain-level error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid catalog data: {0}")]
    Catalog(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", crate::validation::get_field_display_label(field), message)
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}
