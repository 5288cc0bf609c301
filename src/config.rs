use serde::{Deserialize, Serialize};

use crate::engine::FirstPlayerMode;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Session settings, stored as YAML next to the executable by the embedding
/// shell. `log_prefix` is what the shell hands to `init_logger`.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Human,
            log_prefix: None,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref prefix) = self.log_prefix
            && prefix.is_empty()
        {
            return Err("Log prefix cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Reads and validates a config file. A missing file is not an error: the
/// defaults apply until the shell saves a config for the first time.
pub fn load_config(path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(format!("Failed to read config file {}: {}", path, e)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config(path: &str, config: &Config) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write config file {}: {}", path, e))
}
