use crate::error::{GroceryError, Result};
use crate::store::DEFAULT_ITEMS_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_BASE_URL: &str = "https://grocery-goblin.app/";

/// Configuration for the goblin, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroceryConfig {
    /// Page the share links point at. Any query string is ignored.
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Key the list is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Whether `goblin voice` may listen on stdin
    #[serde(default = "default_voice")]
    pub voice: bool,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_ITEMS_KEY.to_string()
}

fn default_voice() -> bool {
    true
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            storage_key: default_storage_key(),
            voice: default_voice(),
        }
    }
}

/// The key names a file in the data directory, so it must stay inside it.
fn validate_storage_key(value: &str) -> std::result::Result<(), String> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(format!(
            "storage-key may only contain letters, digits, '-' and '_': {}",
            value
        ));
    }
    if value == "config" {
        return Err("storage-key \"config\" is reserved".to_string());
    }
    Ok(())
}

pub const CONFIG_KEYS: &[&str] = &["share-base-url", "storage-key", "voice"];

impl GroceryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GroceryError::Io)?;
        let mut config: GroceryConfig =
            serde_json::from_str(&content).map_err(GroceryError::Serialization)?;
        if let Err(e) = validate_storage_key(&config.storage_key) {
            tracing::warn!(error = %e, "ignoring configured storage-key");
            config.storage_key = default_storage_key();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GroceryError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(GroceryError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(GroceryError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "share-base-url" => Some(self.share_base_url.clone()),
            "storage-key" => Some(self.storage_key.clone()),
            "voice" => Some(self.voice.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. The error is a user-facing message.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "share-base-url" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(format!("share-base-url must be an http(s) URL: {}", value));
                }
                self.share_base_url = value.to_string();
            }
            "storage-key" => {
                validate_storage_key(value)?;
                self.storage_key = value.to_string();
            }
            "voice" => {
                self.voice = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => return Err(format!("voice must be true or false: {}", value)),
                };
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroceryConfig::default();
        assert_eq!(config.share_base_url, "https://grocery-goblin.app/");
        assert_eq!(config.storage_key, "goblinItems");
        assert!(config.voice);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = GroceryConfig::load(dir.path()).unwrap();
        assert_eq!(config, GroceryConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"voice": false}"#).unwrap();
        let config = GroceryConfig::load(dir.path()).unwrap();
        assert!(!config.voice);
        assert_eq!(config.storage_key, "goblinItems");
    }

    #[test]
    fn test_hand_edited_storage_key_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"storage_key": "../x", "voice": false}"#,
        )
        .unwrap();

        let config = GroceryConfig::load(dir.path()).unwrap();
        assert_eq!(config.storage_key, "goblinItems");
        assert!(!config.voice);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("goblin");

        let mut config = GroceryConfig::default();
        config.set("share-base-url", "https://lists.example.com/").unwrap();
        config.save(&target).unwrap();

        let loaded = GroceryConfig::load(&target).unwrap();
        assert_eq!(loaded.share_base_url, "https://lists.example.com/");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = GroceryConfig::default();
        assert!(config.set("share-base-url", "ftp://x").is_err());
        assert!(config.set("storage-key", "../escape").is_err());
        assert!(config.set("storage-key", "config").is_err());
        assert!(config.set("voice", "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, GroceryConfig::default());
    }

    #[test]
    fn test_set_voice_accepts_words() {
        let mut config = GroceryConfig::default();
        config.set("voice", "off").unwrap();
        assert_eq!(config.get("voice").as_deref(), Some("false"));
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let keys: Vec<_> = GroceryConfig::default()
            .list_all()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
