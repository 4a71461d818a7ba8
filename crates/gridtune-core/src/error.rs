use thiserror::Error;

pub type Result<T> = std::result::Result<T, GtError>;

#[derive(Debug, Error)]
pub enum GtError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("save format error: {0}")]
    Format(String),

    #[error("aspect lookup error: {0}")]
    Lookup(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
