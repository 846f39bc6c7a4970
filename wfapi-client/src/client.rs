use std::fmt;
use std::sync::Arc;

use crate::config::{BackendUrl, ClientConfig};
use crate::error::ConfigError;
use crate::service::WorkflowService;
use crate::transport::{ReqwestTransport, Transport};

/// Entry point: owns the configured base URL and the shared transport handed to each service.
#[derive(Clone)]
pub struct Client {
    backend_url: BackendUrl,
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config)?;
        tracing::debug!(backend_url = %config.backend_url, "client configured");
        Ok(Self::with_transport(config.backend_url, Arc::new(transport)))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn with_transport(backend_url: BackendUrl, transport: Arc<dyn Transport>) -> Self {
        Self {
            backend_url,
            transport,
        }
    }

    pub fn backend_url(&self) -> &BackendUrl {
        &self.backend_url
    }

    pub fn workflows(&self) -> WorkflowService {
        WorkflowService::new(self.backend_url.clone(), self.transport.clone())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("backend_url", &self.backend_url.as_url().as_str())
            .finish_non_exhaustive()
    }
}
