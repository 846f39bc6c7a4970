use wfapi_client::RequestContext;

use crate::cmd::config::{build_service, report};
use crate::exit_codes;
use crate::output::OutputFormat;
use crate::{ConnectionArgs, OutputArgs};

pub async fn delete_cmd(
    ctx: &RequestContext,
    id: &str,
    output: OutputArgs,
    connection: &ConnectionArgs,
) -> i32 {
    let Some(service) = build_service(connection, &output) else {
        return exit_codes::INVALID_INPUT;
    };

    let result = service.delete(ctx, id).await;
    if result.is_ok() && output.format == OutputFormat::Text && !output.quiet {
        eprintln!("Workflow {id} deleted");
    }
    report(result, &output)
}
