use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use url::Url;
use wfapi_core::{
    Envelope, JsonResponse, StatusUpdateRequest, WorkflowCreateRequest, WorkflowUpdateRequest,
};

use crate::config::BackendUrl;
use crate::context::RequestContext;
use crate::error::TransportError;
use crate::transport::{Method, Transport, TransportRequest};

const RESOURCE: &str = "workflows";

/// CRUD operations on the `workflows` collection.
///
/// Holds only the base URL and a shared transport, so it is cheap to clone and safe to use
/// from any number of tasks. Each method issues exactly one request and returns the
/// transport's result untouched: no retries, no status interpretation.
#[derive(Clone)]
pub struct WorkflowService {
    backend_url: BackendUrl,
    transport: Arc<dyn Transport>,
}

impl WorkflowService {
    pub fn new(backend_url: BackendUrl, transport: Arc<dyn Transport>) -> Self {
        Self {
            backend_url,
            transport,
        }
    }

    pub fn backend_url(&self) -> &BackendUrl {
        &self.backend_url
    }

    /// `POST /workflows` with `{"data": workflow}`.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        workflow: &WorkflowCreateRequest,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.backend_url.join(&[RESOURCE])?;
        let body = envelope(workflow)?;
        self.dispatch(ctx, Method::POST, url, Some(body)).await
    }

    /// `PUT /workflows/{id}` with `{"data": workflow}`.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: impl AsRef<str>,
        workflow: &WorkflowUpdateRequest,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.item_url(id.as_ref())?;
        let body = envelope(workflow)?;
        self.dispatch(ctx, Method::PUT, url, Some(body)).await
    }

    /// `PUT /workflows/{id}` with `{"data": {"active": active}}`.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: impl AsRef<str>,
        active: bool,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.item_url(id.as_ref())?;
        let body = envelope(&StatusUpdateRequest::new(active))?;
        self.dispatch(ctx, Method::PUT, url, Some(body)).await
    }

    /// `GET /workflows?page={page}&limit={limit}`. Bounds are the server's concern.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: u32,
        limit: u32,
    ) -> Result<JsonResponse, TransportError> {
        let mut url = self.backend_url.join(&[RESOURCE])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        self.dispatch(ctx, Method::GET, url, None).await
    }

    /// `GET /workflows/{id}`.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        id: impl AsRef<str>,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.item_url(id.as_ref())?;
        self.dispatch(ctx, Method::GET, url, None).await
    }

    /// `DELETE /workflows/{id}`.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        id: impl AsRef<str>,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.item_url(id.as_ref())?;
        self.dispatch(ctx, Method::DELETE, url, None).await
    }

    fn item_url(&self, id: &str) -> Result<Url, TransportError> {
        self.backend_url.join(&[RESOURCE, id])
    }

    async fn dispatch(
        &self,
        ctx: &RequestContext,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<JsonResponse, TransportError> {
        tracing::debug!(%method, %url, "sending workflow request");
        let req = TransportRequest { method, url, body };
        let result = ctx.run(self.transport.send(ctx, req)).await;
        match &result {
            Ok(resp) => tracing::debug!(status = resp.status, "workflow request completed"),
            Err(e) => tracing::debug!(error = %e, "workflow request failed"),
        }
        result
    }
}

impl fmt::Debug for WorkflowService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowService")
            .field("backend_url", &self.backend_url.as_url().as_str())
            .finish_non_exhaustive()
    }
}

fn envelope<T: Serialize>(data: &T) -> Result<serde_json::Value, TransportError> {
    serde_json::to_value(Envelope::new(data)).map_err(|e| TransportError::Encode(e.to_string()))
}
