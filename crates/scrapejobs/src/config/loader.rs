use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::schema::Config;
use crate::error::ConfigError;

/// Overrides `data_folder`.
pub const ENV_DATA_FOLDER: &str = "SCRAPEJOBS_DATA_FOLDER";
/// Overrides `decode.strict` (`true`/`false`/`1`/`0`).
pub const ENV_STRICT_DECODING: &str = "SCRAPEJOBS_STRICT_DECODING";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let mut config: Config = serde_json::from_str(content)?;

    apply_env_overrides(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
    if let Ok(folder) = std::env::var(ENV_DATA_FOLDER) {
        if !folder.is_empty() {
            log::debug!("Data folder overridden by {}", ENV_DATA_FOLDER);
            config.data_folder = folder;
        }
    }

    if let Ok(value) = std::env::var(ENV_STRICT_DECODING) {
        config.decode.strict = match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            _ => {
                return Err(ConfigError::InvalidEnv {
                    name: ENV_STRICT_DECODING.to_string(),
                    value,
                })
            }
        };
    }

    Ok(())
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.data_folder.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "data_folder must not be empty".to_string(),
        });
    }

    EnvFilter::try_new(&config.logging.level).map_err(|e| ConfigError::InvalidFilter {
        filter: config.logging.level.clone(),
        reason: e.to_string(),
    })?;

    Ok(())
}
