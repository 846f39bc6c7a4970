mod common;
mod envelope;
mod response;
mod status;
mod workflow;

pub use common::{AnyValue, Extra};
pub use envelope::Envelope;
pub use response::JsonResponse;
pub use status::StatusUpdateRequest;
pub use workflow::{WorkflowCreateRequest, WorkflowId, WorkflowUpdateRequest};
