use thiserror::Error;

/// Error types for loading dashboard data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never produced a response (network, CORS, aborted fetch)
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// The response body was not a valid dashboard payload
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Failure reported by a data source that is not HTTP based
    #[error("Data source error: {0}")]
    Source(String),
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
