use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_result<T: Serialize>(format: OutputFormat, quiet: bool, result: &T) {
    if quiet {
        return;
    }
    let rendered = match format {
        OutputFormat::Text => serde_json::to_string_pretty(result),
        OutputFormat::Json => serde_json::to_string(result),
    };
    if let Ok(s) = rendered {
        println!("{s}");
    }
}

pub fn print_error(format: OutputFormat, quiet: bool, message: &str) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => eprintln!("error: {message}"),
        OutputFormat::Json => {
            let err = serde_json::json!({"error": message});
            eprintln!("{}", serde_json::to_string(&err).unwrap_or_default());
        }
    }
}

/// Error from the remote, with whatever body it sent back.
pub fn print_remote_error(
    format: OutputFormat,
    quiet: bool,
    status: u16,
    body: &serde_json::Value,
) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => {
            eprintln!("error: remote returned status {status}");
            if !body.is_null() {
                if let Ok(s) = serde_json::to_string_pretty(body) {
                    eprintln!("{s}");
                }
            }
        }
        OutputFormat::Json => {
            let err = serde_json::json!({"error": "remote error", "status": status, "body": body});
            eprintln!("{}", serde_json::to_string(&err).unwrap_or_default());
        }
    }
}
