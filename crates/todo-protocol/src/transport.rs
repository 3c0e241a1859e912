//! Transport Seam

use crate::error::ProtocolError;

/// Delivers a form-encoded body to the API endpoint and returns the raw
/// response text.
///
/// Implementations run on a single-threaded executor, so the returned
/// future is not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, body: String) -> Result<String, ProtocolError>;
}
