//! Error types for selector construction and definition loading.

use thiserror::Error;

/// Errors produced while loading a selector definition or instantiating its controllers.
///
/// Steady-state ticking never fails; these only surface from construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectorError {
    #[error("unknown controller template '{0}'")]
    UnknownTemplate(String),
    #[error("failed to instantiate template '{template}': {reason}")]
    Instantiate { template: String, reason: String },
    #[error("invalid selector definition: {0}")]
    InvalidDefinition(String),
    #[error("selector json parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SelectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
