use crate::commands::{CmdMessage, CmdResult};
use crate::config::GroceryConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            let config = GroceryConfig::load(config_dir)?;
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GroceryConfig::load(config_dir)?;
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {}",
                    key
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GroceryConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}
