use std::fmt;
use thiserror::Error;

/// A single failed check on a submitted record, addressed to one field so the
/// caller can surface it inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

#[derive(Error, Debug)]
pub enum CompventaError {
    /// The external data source was unreachable or returned a malformed
    /// document. The affected view stays empty; there is no retry.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CompventaError>;
