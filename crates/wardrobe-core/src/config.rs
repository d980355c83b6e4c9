use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WardrobeError};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# wardrobe configuration file
# Location: ~/.wardrobe/config.toml

[inventory]
# Location used by `wardrobe item add` when --location is omitted.
# Must name an existing location.
# Example: default_location = "Bedroom closet"
default_location = ""
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Inventory-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InventoryConfig {
    /// Fallback location name for new items
    #[serde(default)]
    pub default_location: String,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| WardrobeError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| WardrobeError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config file with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "inventory.default_location" => Some(self.inventory.default_location.clone()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "inventory.default_location" => {
                self.inventory.default_location = value.to_string();
                Ok(())
            }
            _ => Err(WardrobeError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![(
            "inventory.default_location".to_string(),
            self.inventory.default_location.clone(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.inventory.default_location.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.inventory.default_location = "Hallway".to_string();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.inventory.default_location, "Hallway");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();
        config
            .set("inventory.default_location", "Bedroom closet")
            .unwrap();
        assert_eq!(
            config.get("inventory.default_location").unwrap(),
            "Bedroom closet"
        );
        assert!(config.get("inventory.unknown").is_none());
        assert!(config.set("inventory.unknown", "x").is_err());
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = TempDir::new().unwrap();
        let path = Config::init(dir.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[inventory]"));

        // init again must not overwrite
        fs::write(&path, "[inventory]\ndefault_location = \"Attic\"\n").unwrap();
        Config::init(dir.path()).unwrap();
        let kept = Config::load(dir.path()).unwrap();
        assert_eq!(kept.inventory.default_location, "Attic");
    }
}
