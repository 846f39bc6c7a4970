use wfapi_client::RequestContext;

use crate::cmd::config::{build_service, report};
use crate::exit_codes;
use crate::{ConnectionArgs, OutputArgs};

pub async fn get_cmd(
    ctx: &RequestContext,
    id: &str,
    output: OutputArgs,
    connection: &ConnectionArgs,
) -> i32 {
    let Some(service) = build_service(connection, &output) else {
        return exit_codes::INVALID_INPUT;
    };
    report(service.get(ctx, id).await, &output)
}
