//! Error types.
//!
//! - [`FetchError`] - Network/fetch-related errors for fragment requests
//! - [`FragmentError`] - Failures while splicing a fragment into the page
//! - [`ConfigError`] - Embedded site configuration errors

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Response body was not text
    #[error("Invalid response content")]
    InvalidContent,
    #[error("Request timed out")]
    Timeout,
}

/// Header/footer fragment loading errors.
#[derive(Debug, Clone, Error)]
pub enum FragmentError {
    #[error("placeholder `{0}` not found")]
    MissingPlaceholder(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Site configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site.toml: {0}")]
    Parse(#[from] toml::de::Error),
}
