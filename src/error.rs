use thiserror::Error;

#[derive(Error, Debug)]
pub enum FizzBuzzError {
    /// User-facing message; printed as-is by the binary.
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("tomorrow's date is out of range")]
    DateOutOfRange,
}

impl FizzBuzzError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        FizzBuzzError::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FizzBuzzError>;
