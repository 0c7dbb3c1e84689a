use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rigsmith_core::config::{AppConfig, LoadOptions, LogFormat};
use serde::Serialize;
use toml::Value;

use crate::commands::{CommandResult, CONFIG_FAILURE_EXIT};

const COMMAND: &str = "config";

#[derive(Debug, Serialize)]
struct ConfigField {
    key: &'static str,
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct ConfigOutput {
    precedence: &'static str,
    fields: Vec<ConfigField>,
}

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "config_validation",
                format!("config validation failed: {error}"),
                CONFIG_FAILURE_EXIT,
            );
        }
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let catalog_path = config
        .catalog
        .path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<unset>".to_string());

    let fields = vec![
        ConfigField {
            key: "catalog.path",
            value: catalog_path,
            source: source("catalog.path", &["RIGSMITH_CATALOG_PATH"]),
        },
        ConfigField {
            key: "suggestions.flat_limit",
            value: config.suggestions.flat_limit.to_string(),
            source: source("suggestions.flat_limit", &["RIGSMITH_SUGGESTIONS_FLAT_LIMIT"]),
        },
        ConfigField {
            key: "suggestions.per_bucket_limit",
            value: config.suggestions.per_bucket_limit.to_string(),
            source: source(
                "suggestions.per_bucket_limit",
                &["RIGSMITH_SUGGESTIONS_PER_BUCKET_LIMIT"],
            ),
        },
        ConfigField {
            key: "logging.level",
            value: config.logging.level.clone(),
            source: source("logging.level", &["RIGSMITH_LOGGING_LEVEL", "RIGSMITH_LOG_LEVEL"]),
        },
        ConfigField {
            key: "logging.format",
            value: format_name(config.logging.format).to_string(),
            source: source("logging.format", &["RIGSMITH_LOGGING_FORMAT", "RIGSMITH_LOG_FORMAT"]),
        },
    ];

    CommandResult::report(
        COMMAND,
        &ConfigOutput { precedence: "override > env > file > default", fields },
    )
}

fn format_name(format: LogFormat) -> &'static str {
    match format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    }
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("rigsmith.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/rigsmith.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}
