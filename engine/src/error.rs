//! Error types for the mock cloud engine
//!
//! None of these reach a client; callers recover to a well-formed envelope.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid LIMIT operand: {0:?}")]
    InvalidLimit(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Snowflake-style error code, used when logging a recovered failure
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidLimit(_) => "001003",
            Error::Json(_) => "002001",
        }
    }
}
