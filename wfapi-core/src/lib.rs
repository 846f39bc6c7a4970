#![forbid(unsafe_code)]

//! Request and response shapes for the workflows REST API.
//!
//! Nothing in this crate performs I/O; the HTTP side lives in `wfapi-client`.

pub mod types;

pub use crate::types::{
    AnyValue, Envelope, Extra, JsonResponse, StatusUpdateRequest, WorkflowCreateRequest, WorkflowId,
    WorkflowUpdateRequest,
};
