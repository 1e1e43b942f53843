use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;
