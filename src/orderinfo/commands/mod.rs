use crate::config::OrderInfoConfig;
use crate::model::OrderRecord;
use crate::store::SaveMode;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod load;
pub mod save;

/// Message shown when an operation needs records and the store has none.
pub const NO_RECORDS_MESSAGE: &str = "No records found. Please add or load records first.";

#[derive(Debug, Clone)]
pub struct OrderPaths {
    /// Directory holding config.json
    pub config_dir: PathBuf,
    /// Directory relative data files are resolved against
    pub base_dir: PathBuf,
}

impl OrderPaths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            config_dir: base_dir.join(crate::config::CONFIG_DIRNAME),
            base_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_orders: Vec<OrderRecord>,
    pub listed_orders: Vec<OrderRecord>,
    pub loaded_count: Option<usize>,
    pub save_mode: Option<SaveMode>,
    pub config: Option<OrderInfoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_orders(mut self, orders: Vec<OrderRecord>) -> Self {
        self.affected_orders = orders;
        self
    }

    pub fn with_listed_orders(mut self, orders: Vec<OrderRecord>) -> Self {
        self.listed_orders = orders;
        self
    }

    pub fn with_config(mut self, config: OrderInfoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
