use thiserror::Error;

/// Failure of a call to the catalog API or the image host
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Browser API error: {0}")]
    Browser(String),

    #[error("Upload response carried no url")]
    MissingUrl,
}

impl From<gloo_net::Error> for GatewayError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => GatewayError::Decode(e.to_string()),
            other => GatewayError::Network(other.to_string()),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
