use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunklineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Conversion response error: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, ChunklineError>;
