use wfapi_client::{RequestContext, WorkflowUpdateRequest};

use crate::cmd::config::{build_service, load_payload, report};
use crate::exit_codes;
use crate::output::print_error;
use crate::{ConnectionArgs, OutputArgs, PayloadArgs};

pub async fn update_cmd(
    ctx: &RequestContext,
    id: &str,
    payload: &PayloadArgs,
    output: OutputArgs,
    connection: &ConnectionArgs,
) -> i32 {
    let workflow = match load_payload(payload) {
        Ok(map) => WorkflowUpdateRequest::from(map),
        Err(e) => {
            print_error(output.format, output.quiet, &e);
            return exit_codes::INVALID_INPUT;
        }
    };

    let Some(service) = build_service(connection, &output) else {
        return exit_codes::INVALID_INPUT;
    };

    report(service.update(ctx, id, &workflow).await, &output)
}
