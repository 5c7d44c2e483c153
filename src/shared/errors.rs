use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid route path: {0}")]
    InvalidPath(String),

    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event listener error: {0}")]
    Listener(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
