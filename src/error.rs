use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Text shown to the user, without the error-kind prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Service(msg)
            | AppError::Transport(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::Io(e) => e.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(e: tempfile::PersistError) -> Self {
        AppError::Io(e.error)
    }
}
