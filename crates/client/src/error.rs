/// Errors from talking to the identity gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the session or credentials (401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx response.
    #[error("Gateway error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The endpoint URL could not be built from the configured base.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from resolving the client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Production builds have no local server to fall back to.
    #[error("GREENLIGHT_API_URL must be set in production")]
    MissingApiUrl,

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}
