use thiserror::Error;

pub type Result<T> = std::result::Result<T, RootError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported input: {0}")]
    Unsupported(String),
}
