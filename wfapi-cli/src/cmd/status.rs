use wfapi_client::RequestContext;

use crate::cmd::config::{build_service, report};
use crate::exit_codes;
use crate::{ConnectionArgs, OutputArgs};

pub async fn status_cmd(
    ctx: &RequestContext,
    id: &str,
    active: bool,
    output: OutputArgs,
    connection: &ConnectionArgs,
) -> i32 {
    let Some(service) = build_service(connection, &output) else {
        return exit_codes::INVALID_INPUT;
    };
    report(service.update_status(ctx, id, active).await, &output)
}
