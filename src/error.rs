//! Error types for conjugo.

use thiserror::Error;

/// Result type for conjugo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching, extracting or serving conjugations.
#[derive(Error, Debug)]
pub enum Error {
    /// Every fetch attempt timed out or failed to connect.
    #[error("Gateway timeout after {attempts} attempt(s): {cause}")]
    GatewayTimeout {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Text of the last transport failure.
        cause: String,
    },

    /// Upstream transport failure that is not worth retrying.
    #[error("Network error: {0}")]
    BadGateway(String),

    /// Unexpected failure while turning a page into a conjugation tree.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP service could not start.
    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// HTTP status the service answers with when this error escapes a handler.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::GatewayTimeout { .. } => 504,
            Error::BadGateway(_) => 502,
            _ => 500,
        }
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
