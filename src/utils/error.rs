use thiserror::Error;

/// Failure of a single client operation.
///
/// Every variant is terminal for the operation that produced it; the UI stays
/// in whatever state it reached before the failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never completed (DNS, connection, CORS, ...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body could not be parsed into the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The host platform bridge failed
    #[error("Host platform error: {0}")]
    Host(String),

    #[error("No user identity available")]
    MissingUser,

    #[error("Message too long ({length} characters, limit is {limit})")]
    MessageTooLong { length: usize, limit: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
