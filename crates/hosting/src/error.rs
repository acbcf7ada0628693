//! Error types for chalkline-hosting.

/// Error type for failures that prevent getting any response from the host.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostingError {
    /// Returned when the request could not be delivered or no response was
    /// read (DNS, TLS, connection refused, ...).
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// Endpoint that was called.
        url: String,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when the request body cannot be encoded.
    #[error("cannot encode request: {reason}")]
    Encode {
        /// Description of the encoding failure.
        reason: String,
    },
}
