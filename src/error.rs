use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigilError {
    #[error("signing config not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("required signing field missing: {0}")]
    FieldMissing(String),

    #[error("keystore file does not exist: {}", .0.display())]
    PathInvalid(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SigilError>;
