use log::LevelFilter;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "models/iris_decision_tree_pipeline.json";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingRequired { field: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serialized model pipeline read once at startup
    pub model_path: PathBuf,
    pub log_level: LevelFilter,
    /// Upper bound on request bodies, in bytes
    pub max_payload_size: usize,
    /// HTTP worker threads, actix picks the CPU count when unset
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            log_level: LevelFilter::Info,
            max_payload_size: 64 * 1024,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "host".to_string(),
            });
        }
        if self.model_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "model_path".to_string(),
            });
        }
        if self.max_payload_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_payload_size".to_string(),
                value: self.max_payload_size.to_string(),
                reason: "Must be > 0".to_string(),
            });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "workers".to_string(),
                value: "0".to_string(),
                reason: "Must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
