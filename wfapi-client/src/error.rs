use wfapi_core::JsonResponse;

/// The one error type every service operation returns.
///
/// Produced by the transport (or by the [`RequestContext`](crate::RequestContext) it runs
/// under) and handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("request cancelled")]
    Cancelled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
    #[error("timeout")]
    Timeout,
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("remote returned status {}", .response.status)]
    Status { response: Box<JsonResponse> },
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("response too large (>{max_bytes} bytes)")]
    ResponseTooLarge { max_bytes: usize },
    #[error("http error: {0}")]
    Other(String),
}

impl TransportError {
    /// The response received before the failure, when there was one.
    pub fn response(&self) -> Option<&JsonResponse> {
        match self {
            Self::Status { response } => Some(&**response),
            _ => None,
        }
    }

    /// True for both explicit cancellation and deadline expiry.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing backend URL (set WFAPI_BACKEND_URL or pass it explicitly)")]
    MissingBackendUrl,
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidBackendUrl { url: String, reason: String },
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
    #[error("invalid header: {0}")]
    InvalidHeader(String),
    #[error("failed to build http client: {0}")]
    Build(String),
}

impl ConfigError {
    pub fn invalid_backend_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBackendUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
