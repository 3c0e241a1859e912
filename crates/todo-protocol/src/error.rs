//! Protocol Errors

use thiserror::Error;

/// Everything that can go wrong between building a request and decoding its
/// response.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to encode form body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("failed to decode form body: {0}")]
    FormDecode(#[from] serde_urlencoded::de::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or JS-side failure; the message is whatever the host reported.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("backend answered with HTTP {0}")]
    Status(u16),

    #[error("unknown api method: {0:?}")]
    UnknownMethod(String),

    #[error("missing form field: {0}")]
    MissingField(&'static str),
}
