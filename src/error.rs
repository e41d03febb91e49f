//! Error type shared by the detection entry points and the I/O helpers.

use thiserror::Error;

/// Failure raised by grid construction, detection, or grid/report I/O.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The grid or mask handed to a detection call is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A tunable is outside its meaningful range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl DetectError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;
