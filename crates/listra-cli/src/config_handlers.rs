//! Handler functions for config CLI commands.
//!
//! Implements the `config` subcommands (`path`, `init`, `get`) over
//! [`ClientConfig`].

use listra_client::ClientConfig;
use listra_core::Error as CoreError;

use crate::cli::ConfigAction;
use crate::error::Result;

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { force } => cmd_config_init(config_path, force),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match ClientConfig::resolve_config_path(config_path) {
        Some(path) => {
            let exists = path.exists();
            println!("{}", path.display());
            if !exists {
                eprintln!("(file does not exist — run `listra config init` to create it)");
            }
            Ok(())
        }
        None => Err(CoreError::config("Could not determine config directory for this platform").into()),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init(config_path: Option<&str>, force: bool) -> Result<()> {
    let path = ClientConfig::resolve_config_path(config_path)
        .ok_or_else(|| CoreError::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(CoreError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(CoreError::from)?;
    }

    ClientConfig::default().write_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Get a configuration value by key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| CoreError::config(e.to_string()))?;
    match value.get(key) {
        Some(val) => {
            println!("{}", format_toml_value(val));
            Ok(())
        }
        None => Err(CoreError::config(format!("Key '{key}' not found in configuration")).into()),
    }
}

/// Render a TOML value without quoting bare strings.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
