use thiserror::Error;

/// Custom error types for the Cloudflare zone manager
#[derive(Error, Debug)]
pub enum ZoneManagerError {
    /// Underlying HTTP call failed (connection, timeout, or JSON decoding)
    #[error("Cloudflare transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client could not be constructed from the supplied settings
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    /// The zones query matched no zone for the domain, or was rejected
    #[error("Zone lookup failed for {domain}: {message}")]
    ZoneLookup { domain: String, message: String },

    /// The cache purge request was rejected by the API
    #[error("Failed to clear the cache on {domain}: {message}")]
    CachePurge { domain: String, message: String },

    /// The development mode status query was rejected by the API
    #[error("Failed to query development mode for {domain}: {message}")]
    DevModeQuery { domain: String, message: String },

    /// The development mode update was rejected by the API
    #[error("Failed setting {domain} to development mode: {message}")]
    DevModeSet { domain: String, message: String },
}

/// Result type for Cloudflare zone manager operations
pub type ZoneManagerResult<T> = Result<T, ZoneManagerError>;
