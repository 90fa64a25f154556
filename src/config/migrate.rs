//! Configuration file upgrades: detect keys missing from an older YAML file
//! and fill them with their defaults without touching the user's values.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every current configuration file is expected to carry.
pub const KNOWN_KEYS: &[&str] = &[
    "database",
    "jobs_api_url",
    "preferences_api_url",
    "page_size",
    "request_timeout_secs",
    "search_debounce_ms",
    "result_limit",
    "push_token",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top-level value is not a mapping",
            path.display()
        ))),
    }
}

/// Return the known keys that are absent from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add every missing key with its default value.
///   Ok(true)  → file rewritten
///   Ok(false) → nothing to do
pub fn upgrade_config_file(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(false);
    }

    let mut map = read_mapping(path)?;
    let defaults = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;

    if let Value::Mapping(defaults) = defaults {
        for key in &missing {
            let k = Value::String((*key).to_string());
            if let Some(v) = defaults.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized)?;

    success(format!(
        "Configuration upgraded, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str, body: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("{}_jobfinder.conf", name));
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn detects_and_fills_missing_keys() {
        let path = temp_conf("cfg_upgrade", "database: /tmp/x.sqlite\npage_size: 5\n");

        let missing = missing_fields(&path).unwrap();
        assert!(missing.contains(&"jobs_api_url"));
        assert!(!missing.contains(&"page_size"));

        assert!(upgrade_config_file(&path).unwrap());
        assert!(missing_fields(&path).unwrap().is_empty());

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.page_size, 5);
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.search_debounce_ms, 300);

        fs::remove_file(&path).ok();
    }
}
