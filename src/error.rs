use thiserror::Error;

use crate::data::mapper::Role;

/// Failure to build a dashboard view from the current widget selections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("{role} column '{column}' does not exist in the uploaded file")]
    UnknownColumn { role: Role, column: String },
}

/// Failure to fetch or decode the header animation.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid animation document: {0}")]
    Decode(#[from] serde_json::Error),
}
