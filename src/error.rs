use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("empty description")]
    EmptyDescription,

    #[error("no todo found with ID = {0}")]
    NotFound(i64),

    #[error("Invalid ID: must be a number!")]
    InvalidId,

    #[error("Database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Errors a user can fix by retyping the command. These are reported
    /// but do not fail the process.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::EmptyDescription | AppError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
