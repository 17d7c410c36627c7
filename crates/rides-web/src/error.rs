use thiserror::Error;

/// Errors raised while starting or running the server
#[derive(Error, Debug)]
pub enum WebError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebError>;
