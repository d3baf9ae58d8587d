use thiserror::Error;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Reference data corrupt: {0}")]
    DataIntegrity(String),

    #[error("Invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLineValue(u8),

    #[error("Reading service error: {0}")]
    Reading(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OracleError>;
