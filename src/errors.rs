use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        AppError::Validation(value)
    }
}
