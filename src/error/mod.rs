use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for fnkit
#[derive(Error, Debug)]
pub enum FnkitError {
    #[error("[E{code:04}] Invalid argument: {message}")]
    InvalidArgument { code: u16, message: String },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FnkitError {
    /// Create an invalid-argument error with default code
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code: ErrorCode::VALIDATION_GENERIC,
            message: message.into(),
        }
    }

    /// Error for a reduction attempted over an empty sequence
    pub fn empty_input() -> Self {
        Self::InvalidArgument {
            code: ErrorCode::VALIDATION_EMPTY_INPUT,
            message: "cannot aggregate an empty sequence".to_string(),
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Attach the offending file path to a configuration error
    pub fn with_path(mut self, file: impl Into<PathBuf>) -> Self {
        if let Self::Config { path, .. } = &mut self {
            *path = Some(file.into());
        }
        self
    }

    /// Attach an underlying cause to a configuration error
    pub fn with_source(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        if let Self::Config { source, .. } = &mut self {
            *source = Some(Box::new(cause));
        }
        self
    }

    /// Numeric code of this error
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. } | Self::Config { code, .. } => *code,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, FnkitError>;
