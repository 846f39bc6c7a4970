use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::{ConfigError, TransportError};

pub const BACKEND_URL_ENV: &str = "WFAPI_BACKEND_URL";
pub const API_KEY_ENV: &str = "WFAPI_API_KEY";
pub const TIMEOUT_ENV: &str = "WFAPI_TIMEOUT_MS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Absolute http(s) base URL that resource paths are joined onto.
///
/// Query strings and fragments are rejected up front so joined URLs carry only the
/// parameters an operation sets itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl(Url);

impl BackendUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(raw.trim())
            .map_err(|e| ConfigError::invalid_backend_url(raw, e.to_string()))?;
        Self::from_url(url)
    }

    pub fn from_url(mut url: Url) -> Result<Self, ConfigError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid_backend_url(
                url.as_str(),
                format!("unsupported scheme {:?}", url.scheme()),
            ));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::invalid_backend_url(url.as_str(), "missing host"));
        }
        if url.query().is_some() {
            return Err(ConfigError::invalid_backend_url(
                url.as_str(),
                "must not contain a query string",
            ));
        }
        if url.fragment().is_some() {
            return Err(ConfigError::invalid_backend_url(
                url.as_str(),
                "must not contain a fragment",
            ));
        }
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Append each segment to the base path, percent-encoding it so it stays one segment.
    ///
    /// `.` and `..` cannot be expressed as a single segment (URL parsers resolve them even when
    /// percent-encoded), so they are refused rather than allowed to climb out of the resource.
    pub fn join(&self, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.0.clone();
        let mut path = url.path().trim_end_matches('/').to_string();
        for segment in segments {
            if matches!(*segment, "." | "..") {
                return Err(TransportError::InvalidUrl(format!(
                    "path segment {segment:?} is not addressable"
                )));
            }
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        url.set_path(&path);
        Ok(url)
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for BackendUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Settings for [`Client`](crate::Client) and [`ReqwestTransport`](crate::ReqwestTransport).
pub struct ClientConfig {
    pub backend_url: BackendUrl,
    /// Per-request timeout applied by the HTTP client, independent of any context deadline.
    pub timeout: Duration,
    pub user_agent: String,
    /// Sent as `Authorization: ApiKey <key>` on every request.
    pub api_key: Option<SecretString>,
    pub default_headers: BTreeMap<String, String>,
    pub max_response_bytes: usize,
}

impl ClientConfig {
    pub fn new(backend_url: BackendUrl) -> Self {
        Self {
            backend_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("wfapi/", env!("CARGO_PKG_VERSION")).to_string(),
            api_key: None,
            default_headers: BTreeMap::new(),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    /// Read `WFAPI_BACKEND_URL` (required), `WFAPI_API_KEY` and `WFAPI_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = non_empty(BACKEND_URL_ENV).ok_or(ConfigError::MissingBackendUrl)?;
        let mut config = Self::new(BackendUrl::parse(&backend_url)?);

        if let Some(key) = non_empty(API_KEY_ENV) {
            config = config.with_api_key(key);
        }
        if let Some(ms) = non_empty(TIMEOUT_ENV) {
            let ms: u64 = ms
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidTimeout(format!("{TIMEOUT_ENV}={ms}: {e}")))?;
            config.timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_max_response_bytes(mut self, max: usize) -> Self {
        self.max_response_bytes = max;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("backend_url", &self.backend_url.as_url().as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_headers", &self.default_headers.keys().collect::<Vec<_>>())
            .field("max_response_bytes", &self.max_response_bytes)
            .finish()
    }
}
