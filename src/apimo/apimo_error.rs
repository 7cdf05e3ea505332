use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApimoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("APIMO API timeout after {0}s")]
    Timeout(u64),

    #[error("APIMO API error: {status} {message}")]
    Status { status: u16, message: String },

    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
}
