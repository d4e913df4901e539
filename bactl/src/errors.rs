use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// A required command parameter was not supplied with the request
    #[error("Missing parameter : {name}")]
    MissingParameter { name: String },

    /// The `file` parameter was supplied but holds no text
    #[error("Found zero size file parameter")]
    EmptyFileParameter,

    /// The host's scratch directory could not be resolved
    #[error("Can't find temporary folder")]
    TempDirUnavailable,

    /// The `file` parameter is not valid base64
    #[error("Invalid base64 in file parameter: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Filesystem operation error
    #[error("Failed to {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Wire-protocol status code for this error (HTTP-status-like numerics).
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingParameter { .. } => 400,
            Error::EmptyFileParameter => 400,
            Error::TempDirUnavailable => 400,
            Error::InvalidBase64(_) => 400,
            Error::Io { .. } => 500,
            Error::Other(_) => 500,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingParameter { name } => format!("Missing parameter : {name}"),
            Error::EmptyFileParameter => "Found zero size file parameter".to_string(),
            Error::TempDirUnavailable => "Can't find temporary folder".to_string(),
            Error::InvalidBase64(e) => format!("Invalid base64 in file parameter: {e}"),
            Error::Io { .. } | Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

/// Type alias for handler operation results
pub type Result<T> = std::result::Result<T, Error>;
