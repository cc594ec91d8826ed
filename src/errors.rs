use thiserror::Error;

/// Error type a fetch capability reports when the request itself fails.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A failed page-context load. Every variant aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    // The fetch capability could not complete the request
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("{path} did not return JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Endpoint path the failure belongs to.
    pub fn path(&self) -> &str {
        match self {
            LoadError::Transport { path, .. }
            | LoadError::Status { path, .. }
            | LoadError::Decode { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("could not build http client: {0}")]
    Client(#[from] reqwest::Error),
}

// Type alias for results that use `LoadError` as the error type
pub type Result<T> = std::result::Result<T, LoadError>;
