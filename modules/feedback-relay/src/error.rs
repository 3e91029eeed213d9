use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Webhook error (status {status}): {message}")]
    Webhook { status: u16, message: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Network(err.to_string())
    }
}
