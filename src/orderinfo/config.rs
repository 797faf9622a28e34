use crate::error::{OrderError, Result};
use crate::orders::DEFAULT_FIRST_ORDER_ID;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIRNAME: &str = ".orderinfo";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "OrderDetails.csv";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for orderinfo, stored in .orderinfo/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderInfoConfig {
    /// Backing CSV file, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Id given to the first order when no orders exist anywhere
    #[serde(default = "default_first_order_id")]
    pub first_order_id: u32,

    /// One of error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_first_order_id() -> u32 {
    DEFAULT_FIRST_ORDER_ID
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for OrderInfoConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            first_order_id: default_first_order_id(),
            log_level: default_log_level(),
        }
    }
}

impl OrderInfoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OrderError::Io)?;
        let config: OrderInfoConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OrderError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(OrderError::Io)?;
        Ok(())
    }

    /// Backing file resolved against `base` when relative
    pub fn data_file_in(&self, base: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base.join(&self.data_file)
        }
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::DataFile => self.data_file.display().to_string(),
            ConfigKey::FirstOrderId => self.first_order_id.to_string(),
            ConfigKey::LogLevel => self.log_level.clone(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            ConfigKey::DataFile => {
                if value.is_empty() {
                    return Err(OrderError::validation("data-file", "cannot be empty"));
                }
                self.data_file = PathBuf::from(value);
            }
            ConfigKey::FirstOrderId => {
                self.first_order_id = value
                    .parse()
                    .ok()
                    .filter(|id| *id > 0)
                    .ok_or_else(|| {
                        OrderError::validation("first-order-id", "expected a positive integer")
                    })?;
            }
            ConfigKey::LogLevel => {
                let level = value.to_ascii_lowercase();
                if !crate::logging::LEVELS.contains(&level.as_str()) {
                    return Err(OrderError::validation(
                        "log-level",
                        format!("expected one of {}", crate::logging::LEVELS.join(", ")),
                    ));
                }
                self.log_level = level;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataFile,
    FirstOrderId,
    LogLevel,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::DataFile,
        ConfigKey::FirstOrderId,
        ConfigKey::LogLevel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DataFile => "data-file",
            ConfigKey::FirstOrderId => "first-order-id",
            ConfigKey::LogLevel => "log-level",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}
