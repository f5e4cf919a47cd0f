#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown script: {0}")]
    UnknownScript(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
