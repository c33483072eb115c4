use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No data: {0}")]
    NoData(String),
    #[error("Failed to parse {file}: {message}")]
    FileParse { file: String, message: String },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl AppError {
    pub fn file_parse(file: impl Into<String>, message: impl ToString) -> Self {
        AppError::FileParse {
            file: file.into(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
