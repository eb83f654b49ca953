#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("Failed to fetch site document: {0}")]
    FetchError(String),

    #[error("Remote server answered with status {0}")]
    HttpError(u16),

    #[error("Error parsing site document: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
