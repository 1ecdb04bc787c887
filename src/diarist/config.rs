use crate::error::{DiaristError, Result};
use crate::store::fs_backend::is_valid_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;
const DEFAULT_LINE_WIDTH: usize = 72;

/// Configuration for diarist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaristConfig {
    /// Minimum leftward travel, in screen units, for a swipe to count as delete
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f64,

    /// Column width the terminal view lays entries out in
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Storage key holding the entry collection
    #[serde(default = "default_entries_key")]
    pub entries_key: String,

    /// Storage key holding the theme preference
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_swipe_threshold() -> f64 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_entries_key() -> String {
    crate::store::ENTRIES_KEY.to_string()
}

fn default_theme_key() -> String {
    crate::theme::THEME_KEY.to_string()
}

impl Default for DiaristConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            line_width: DEFAULT_LINE_WIDTH,
            entries_key: default_entries_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl DiaristConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DiaristError::Io)?;
        let config: DiaristConfig =
            serde_json::from_str(&content).map_err(DiaristError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DiaristError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DiaristError::Serialization)?;
        fs::write(config_path, content).map_err(DiaristError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(DiaristError::Config(format!(
                "swipe_threshold must be a positive number, got {}",
                self.swipe_threshold
            )));
        }
        for key in [&self.entries_key, &self.theme_key] {
            if !is_valid_key(key) {
                return Err(DiaristError::Config(format!(
                    "storage key {:?} may only contain ASCII letters, digits, '-' and '_'",
                    key
                )));
            }
        }
        if self.entries_key == self.theme_key {
            return Err(DiaristError::Config(
                "entries_key and theme_key must differ".to_string(),
            ));
        }
        if [&self.entries_key, &self.theme_key]
            .iter()
            .any(|key| format!("{}.json", key) == CONFIG_FILENAME)
        {
            return Err(DiaristError::Config(
                "storage keys must not shadow config.json".to_string(),
            ));
        }
        Ok(())
    }
}
