use std::fmt::{self, Display};

/// Errors produced by model decoding and validation routines.
#[derive(Debug)]
pub enum ModelError {
    Json(serde_json::Error),
    InvalidConfig { section_type: String, reason: String },
    InvalidPrice(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Json(err) => write!(f, "json error: {err}"),
            ModelError::InvalidConfig {
                section_type,
                reason,
            } => write!(f, "invalid {section_type} section config: {reason}"),
            ModelError::InvalidPrice(raw) => {
                write!(f, "invalid price: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Json(err) => Some(err),
            ModelError::InvalidConfig { .. } | ModelError::InvalidPrice(_) => {
                None
            }
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
