#![forbid(unsafe_code)]

//! Async client for the workflows REST API.
//!
//! [`WorkflowService`] shapes each call (URL, `{"data": ...}` envelope) and hands it to a
//! [`Transport`]; [`ReqwestTransport`] is the default transport. Every operation takes a
//! [`RequestContext`] carrying cancellation and an optional deadline.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod service;
pub mod transport;

pub use crate::client::Client;
pub use crate::config::{BackendUrl, ClientConfig};
pub use crate::context::RequestContext;
pub use crate::error::{ConfigError, TransportError};
pub use crate::service::WorkflowService;
pub use crate::transport::{Method, ReqwestTransport, Transport, TransportRequest};

pub use wfapi_core::{
    AnyValue, Envelope, JsonResponse, StatusUpdateRequest, WorkflowCreateRequest, WorkflowId,
    WorkflowUpdateRequest,
};
