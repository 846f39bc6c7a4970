use clap::Parser;
use wfapi_client::RequestContext;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "wfapi", version, about = "Manage workflows over the workflows REST API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(async {
        let ctx = RequestContext::new();
        let on_interrupt = ctx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::debug!("interrupt received, cancelling request");
                on_interrupt.cancel();
            }
        });
        run_command(&ctx, cli.command).await
    });
    std::process::exit(exit_code);
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` controls the level.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_command(ctx: &RequestContext, command: Command) -> i32 {
    match command {
        Command::Create {
            payload,
            output,
            connection,
        } => cmd::create::create_cmd(ctx, &payload, output, &connection).await,
        Command::Update {
            id,
            payload,
            output,
            connection,
        } => cmd::update::update_cmd(ctx, &id, &payload, output, &connection).await,
        Command::Activate {
            id,
            output,
            connection,
        } => cmd::status::status_cmd(ctx, &id, true, output, &connection).await,
        Command::Deactivate {
            id,
            output,
            connection,
        } => cmd::status::status_cmd(ctx, &id, false, output, &connection).await,
        Command::List {
            page,
            limit,
            output,
            connection,
        } => cmd::list::list_cmd(ctx, page, limit, output, &connection).await,
        Command::Get {
            id,
            output,
            connection,
        } => cmd::get::get_cmd(ctx, &id, output, &connection).await,
        Command::Delete {
            id,
            output,
            connection,
        } => cmd::delete::delete_cmd(ctx, &id, output, &connection).await,
    }
}
