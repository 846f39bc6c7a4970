use wfapi_client::RequestContext;

use crate::cmd::config::{build_service, report};
use crate::exit_codes;
use crate::{ConnectionArgs, OutputArgs};

pub async fn list_cmd(
    ctx: &RequestContext,
    page: u32,
    limit: u32,
    output: OutputArgs,
    connection: &ConnectionArgs,
) -> i32 {
    let Some(service) = build_service(connection, &output) else {
        return exit_codes::INVALID_INPUT;
    };
    report(service.list(ctx, page, limit).await, &output)
}
