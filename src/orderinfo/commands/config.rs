use crate::commands::{CmdMessage, CmdResult, OrderPaths};
use crate::config::{ConfigKey, OrderInfoConfig};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &OrderPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = OrderInfoConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = OrderInfoConfig::load(dir)?;
            let mut result = CmdResult::default();
            match ConfigKey::from_name(&key) {
                Some(k) => result.add_message(CmdMessage::info(config.get(k))),
                None => result.add_message(unknown_key(&key)),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            let Some(k) = ConfigKey::from_name(&key) else {
                result.add_message(unknown_key(&key));
                return Ok(result);
            };

            let mut config = OrderInfoConfig::load(dir)?;
            if let Err(e) = config.set(k, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(k)
            )));
            Ok(result.with_config(config))
        }
    }
}

fn unknown_key(key: &str) -> CmdMessage {
    let known: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.name()).collect();
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        known.join(", ")
    ))
}
