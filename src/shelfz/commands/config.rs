use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::ShelfzConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CatalogPaths, action: ConfigAction) -> Result<CmdResult> {
    let config = ShelfzConfig::load(&paths.config_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => Ok(show_key(&config, &key)),
        ConfigAction::Set(key, value) => set_key(&paths.config_dir, config, &key, &value),
    }
}

fn show_key(config: &ShelfzConfig, key: &str) -> CmdResult {
    let message = match config.get(key) {
        Some(value) => CmdMessage::info(value),
        None => CmdMessage::error(format!("Unknown config key: {}", key)),
    };
    let mut result = CmdResult::default();
    result.add_message(message);
    result
}

/// A rejected key or value is reported as an error message; nothing is written.
fn set_key(dir: &Path, mut config: ShelfzConfig, key: &str, value: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Err(e) = config.set(key, value) {
        result.add_message(CmdMessage::error(e));
        return Ok(result);
    }

    config.save(dir)?;
    let shown = config.get(key).unwrap_or_else(|| value.to_string());
    result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
    Ok(result.with_config(config))
}
