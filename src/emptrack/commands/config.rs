use crate::commands::{CmdMessage, CmdResult};
use crate::config::TrackerConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = TrackerConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = TrackerConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = TrackerConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let dir = tempfile::tempdir().unwrap();

        let set = run(dir.path(), ConfigAction::Set("pause-ms".into(), "200".into())).unwrap();
        assert_eq!(set.messages[0].content, "pause-ms set to 200");

        let shown = run(dir.path(), ConfigAction::ShowKey("pause-ms".into())).unwrap();
        assert_eq!(shown.messages[0].content, "200");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("banner".into(), "loud".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(TrackerConfig::default()));
    }
}
