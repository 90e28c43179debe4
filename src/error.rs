use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid navigation config: {0}")]
    InvalidConfig(String),

    #[error("invalid config payload: {0}")]
    InvalidPayload(String),
}
