// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotasError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External storage is not mounted")]
    StorageUnavailable,

    #[error("File not found")]
    NotFound,

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, NotasError>;
