use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SandboxError {
    #[error("hash primitive unavailable: {0}")]
    HashUnavailable(String),

    #[error("output region not found: {0}")]
    MissingOutputTarget(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SandboxError>;
