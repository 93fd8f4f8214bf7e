use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Connection error: {0}")]
    Connect(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PulseError>;
