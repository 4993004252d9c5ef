use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacrError {
    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FacrError>;
