//! Service config loader (strict parsing).
//!
//! A config file is optional: `$PHONEBOOK_CONFIG` names one explicitly,
//! otherwise `phonebook.yaml` in the working directory is used when present,
//! and built-in defaults apply when neither exists.

pub mod schema;

use std::fs;
use std::path::Path;

use phonebook_core::error::{PhonebookError, Result};

pub use schema::{DocsSection, ServerSection, ServiceConfig};

pub const CONFIG_ENV: &str = "PHONEBOOK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "phonebook.yaml";

pub fn load() -> Result<ServiceConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_from_file(&path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_from_file(DEFAULT_CONFIG_PATH);
    }
    tracing::debug!("no config file found, using defaults");
    Ok(ServiceConfig::default())
}

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PhonebookError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| PhonebookError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
