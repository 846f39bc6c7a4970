use std::path::Path;

use serde_json::{Map, Value};
use wfapi_client::config::{API_KEY_ENV, BACKEND_URL_ENV, TIMEOUT_ENV};
use wfapi_client::{
    Client, ClientConfig, ConfigError, JsonResponse, TransportError, WorkflowService,
};

use crate::exit_codes;
use crate::output::{print_error, print_remote_error, print_result};
use crate::{ConnectionArgs, OutputArgs, PayloadArgs};

pub fn build_service(connection: &ConnectionArgs, output: &OutputArgs) -> Option<WorkflowService> {
    let lookup = |key: &str| {
        let flag = match key {
            BACKEND_URL_ENV => connection.backend_url.clone(),
            API_KEY_ENV => connection.api_key.clone(),
            TIMEOUT_ENV => connection.timeout.map(|ms| ms.to_string()),
            _ => None,
        };
        flag.or_else(|| std::env::var(key).ok())
    };

    let config = match ClientConfig::from_lookup(lookup) {
        Ok(c) => c,
        Err(e) => {
            let message = match e {
                ConfigError::MissingBackendUrl => {
                    format!("missing backend URL. Pass --backend-url or set {BACKEND_URL_ENV}")
                }
                other => other.to_string(),
            };
            print_error(output.format, output.quiet, &message);
            return None;
        }
    };

    match Client::new(config) {
        Ok(client) => Some(client.workflows()),
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            None
        }
    }
}

/// Builds the record from `--file` (JSON or YAML) overlaid with the individual flags.
///
/// Keys are kept exactly as given, explicit `null`s included.
pub fn load_payload(payload: &PayloadArgs) -> Result<Map<String, Value>, String> {
    let mut map = match &payload.file {
        Some(path) => match read_payload_file(path)? {
            Value::Object(map) => map,
            _ => return Err("workflow payload must be an object".to_string()),
        },
        None => Map::new(),
    };

    if let Some(name) = &payload.name {
        map.insert("name".to_string(), Value::String(name.clone()));
    }
    if let Some(description) = &payload.description {
        map.insert("description".to_string(), Value::String(description.clone()));
    }
    if !payload.tags.is_empty() {
        map.insert("tags".to_string(), serde_json::json!(payload.tags));
    }
    merge_set_fields(&mut map, &payload.set_fields)?;

    Ok(map)
}

fn read_payload_file(path: &Path) -> Result<Value, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    if let Ok(v) = serde_json::from_str(&content) {
        return Ok(v);
    }
    if let Ok(v) = serde_yaml::from_str(&content) {
        return Ok(v);
    }
    Err(format!("{} is neither valid JSON nor YAML", path.display()))
}

/// `KEY=VALUE` pairs; values that parse as JSON (`true`, `3`, `[..]`) keep their type.
fn merge_set_fields(map: &mut Map<String, Value>, set_fields: &[String]) -> Result<(), String> {
    for s in set_fields {
        let (k, v) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
        let value =
            serde_json::from_str::<Value>(v).unwrap_or_else(|_| Value::String(v.to_string()));
        map.insert(k.to_string(), value);
    }
    Ok(())
}

pub fn report(result: Result<JsonResponse, TransportError>, output: &OutputArgs) -> i32 {
    match result {
        Ok(resp) => {
            print_result(output.format, output.quiet, &resp.body);
            exit_codes::SUCCESS
        }
        Err(TransportError::Status { response }) => {
            print_remote_error(output.format, output.quiet, response.status, &response.body);
            exit_codes::REMOTE_ERROR
        }
        Err(TransportError::InvalidUrl(msg)) => {
            print_error(output.format, output.quiet, &msg);
            exit_codes::INVALID_INPUT
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::RUNTIME_ERROR
        }
    }
}
