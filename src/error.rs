//! Error types for the SODA client
//!
//! Every public operation returns `Result<T, Error>`. Errors fall into four
//! classes: configuration (caller misuse), transport (network failure),
//! remote (the server answered with status >= 400) and decode (the server
//! answered with something we could not interpret). None of them is retried.

use thiserror::Error;

/// Boxed error produced by a transport implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the SODA client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Cannot get metadata, invalid resource identifier '{identifier}'")]
    InvalidResourceId { identifier: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP transport failed: {0}")]
    Transport(#[source] BoxError),

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("SODA error {status}: GET {url}: {body}")]
    Remote {
        status: u16,
        url: String,
        body: String,
    },

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error from any underlying error
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    /// Create a remote error
    pub fn remote(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The caller misused the API. Never worth retrying.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::InvalidUrl(_) | Error::InvalidResourceId { .. }
        )
    }

    /// Check if this is a network-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if the server answered with an error status
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    /// Check if a response could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// HTTP status of a remote error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Result type alias for the SODA client
pub type Result<T> = std::result::Result<T, Error>;
