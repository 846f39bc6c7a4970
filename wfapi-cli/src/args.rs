use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// Flags win over `WFAPI_*` environment variables.
#[derive(Debug, Args, Clone)]
pub struct ConnectionArgs {
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,
    #[arg(long)]
    pub api_key: Option<String>,
    /// Per-request timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct PayloadArgs {
    /// JSON or YAML file holding the workflow record.
    #[arg(long, short)]
    pub file: Option<std::path::PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set_fields: Vec<String>,
}
