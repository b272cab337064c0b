use std::future::Future;

use thiserror::Error;

/// What the widget sends to a text-generation provider.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
}

/// Internal failure classes. Users only ever see the unified fallback text.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProviderError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("provider rejected credentials with status {0}")]
    Unauthorized(u16),
    #[error("provider quota exceeded")]
    QuotaExceeded,
    #[error("provider blocked the prompt: {0}")]
    Blocked(String),
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ProviderError::Unauthorized(status),
            429 => ProviderError::QuotaExceeded,
            _ => ProviderError::Status { status, body },
        }
    }
}

/// A provider that answers a prompt with generated text.
///
/// Futures are not required to be `Send`; everything runs on the browser
/// main thread.
pub trait TextGenerator {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, ProviderError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_error_classes() {
        assert_eq!(ProviderError::from_status(401, String::new()), ProviderError::Unauthorized(401));
        assert_eq!(ProviderError::from_status(403, String::new()), ProviderError::Unauthorized(403));
        assert_eq!(ProviderError::from_status(429, String::new()), ProviderError::QuotaExceeded);
        assert_eq!(
            ProviderError::from_status(500, "boom".to_string()),
            ProviderError::Status { status: 500, body: "boom".to_string() }
        );
    }
}
