use serde_json::Error as JsonError;
use std::io::Error as IoError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] JsonError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Unknown play category: {0}")]
    UnknownCategory(String),

    #[error("Unknown play outcome: {0}")]
    UnknownOutcome(String),
}
