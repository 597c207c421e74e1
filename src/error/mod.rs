use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
