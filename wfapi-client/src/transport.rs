use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::ExposeSecret;
use serde_json::Value as JsonValue;
use url::Url;
use wfapi_core::JsonResponse;

use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{ConfigError, TransportError};

pub use reqwest::Method;

/// One fully shaped request: the service decides all of it, the transport only sends it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body, serialized by the transport. `None` sends no body.
    pub body: Option<JsonValue>,
}

/// Performs HTTP I/O and JSON (de)serialization for the service layer.
///
/// Implementations should stop work once `ctx` is cancelled or its deadline passes; the
/// service also races every call against the same context, so a transport that ignores it
/// still cannot hold a caller past cancellation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        ctx: &RequestContext,
        req: TransportRequest,
    ) -> Result<JsonResponse, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    max_response_bytes: usize,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (k, v) in &config.default_headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| ConfigError::InvalidHeader(format!("{k}: {e}")))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| ConfigError::InvalidHeader(format!("{k}: {e}")))?;
            headers.insert(name, value);
        }

        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("ApiKey {}", key.expose_secret()))
                .map_err(|e| ConfigError::InvalidHeader(format!("authorization: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Build(e.to_string()))?;

        Ok(Self::from_client(client, config.max_response_bytes))
    }

    /// Use a preconfigured client as-is.
    pub fn from_client(client: reqwest::Client, max_response_bytes: usize) -> Self {
        Self {
            client,
            max_response_bytes,
        }
    }

    async fn execute(&self, req: TransportRequest) -> Result<JsonResponse, TransportError> {
        let mut rb = self.client.request(req.method, req.url);
        if let Some(body) = &req.body {
            rb = rb.json(body);
        }

        let mut resp = rb.send().await.map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();

        let mut headers = BTreeMap::new();
        for (k, v) in resp.headers().iter() {
            if let Ok(s) = v.to_str() {
                headers.insert(k.to_string(), s.to_string());
            }
        }

        if let Some(len) = resp.content_length() {
            if len > self.max_response_bytes as u64 {
                return Err(TransportError::ResponseTooLarge {
                    max_bytes: self.max_response_bytes,
                });
            }
        }

        // Stream with a size cap; content-length may be absent or wrong.
        let mut bytes = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(map_reqwest_error)? {
            if bytes.len() + chunk.len() > self.max_response_bytes {
                return Err(TransportError::ResponseTooLarge {
                    max_bytes: self.max_response_bytes,
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        let success = (200..300).contains(&status);
        let body = match decode_body(&bytes) {
            Ok(v) => v,
            // Keep whatever the server said on error responses, even if it is not JSON.
            Err(_) if !success => JsonValue::String(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => return Err(e),
        };

        let response = JsonResponse::new(status, body).with_headers(headers);
        if success {
            Ok(response)
        } else {
            Err(TransportError::Status {
                response: Box::new(response),
            })
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        ctx: &RequestContext,
        req: TransportRequest,
    ) -> Result<JsonResponse, TransportError> {
        ctx.run(self.execute(req)).await
    }
}

fn decode_body(bytes: &[u8]) -> Result<JsonValue, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| TransportError::Decode(e.to_string()))
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        return TransportError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return TransportError::Network(e.to_string());
    }
    if e.is_decode() {
        return TransportError::Decode(e.to_string());
    }
    TransportError::Other(e.to_string())
}
