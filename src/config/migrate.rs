//! Config file migrations: fill in keys added after the file was written.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

/// Keys every current config file must contain, with their default values.
fn required_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("database", Value::String(String::new())),
        ("organization_id", Value::from(1i64)),
        ("organization", Value::String("My Company".into())),
        ("currency", Value::String("€".into())),
        ("page_size", Value::from(20u64)),
        ("separator_char", Value::String("-".into())),
        ("show_weekday", Value::String("Short".into())),
    ]
}

/// Report missing keys without touching the file.
pub fn check() -> AppResult<Vec<String>> {
    let path = super::Config::config_file();
    if !path.exists() {
        return Err(AppError::ConfigLoad);
    }

    let content = fs::read_to_string(&path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {}", e)))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for (key, _) in required_keys() {
            if !map.contains_key(Value::String(key.to_string())) {
                missing.push(key.to_string());
            }
        }
    }
    Ok(missing)
}

/// Add any missing key with its default value and rewrite the file.
pub fn migrate() -> AppResult<()> {
    let path = super::Config::config_file();
    if !path.exists() {
        return Err(AppError::ConfigLoad);
    }

    let content = fs::read_to_string(&path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("invalid YAML: {}", e)))?;

    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        for (key, default) in required_keys() {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k) {
                // `database` has no sensible generic default; point at the
                // standard location rather than an empty string.
                let v = if key == "database" {
                    Value::String(super::Config::database_file().to_string_lossy().to_string())
                } else {
                    default
                };
                map.insert(k, v);
                added.push(key);
            }
        }
    }

    if added.is_empty() {
        info("Config file is up to date, nothing to migrate.");
        return Ok(());
    }

    let serialized =
        serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(format!("serialize: {}", e)))?;
    fs::write(&path, serialized).map_err(|_| AppError::ConfigSave)?;

    success(format!("Config migrated, added keys: {}", added.join(", ")));
    Ok(())
}
