/// Local input problems caught before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all song fields")]
    MissingFields,

    #[error("Please add at least one song")]
    NoSongs,
}

/// Failures of the `/recommend` round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Non-2xx status with a message from the service.
    #[error("{0}")]
    Server(String),

    /// Non-2xx status without a usable message.
    #[error("Failed to get recommendations")]
    Rejected,

    /// Network unreachable or a body that could not be decoded.
    #[error("An error occurred while fetching recommendations")]
    Transport,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
