use std::io::ErrorKind;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub grid_size: i32,
    pub tick_interval_ms: u64,
    pub food_score: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 12,
            tick_interval_ms: 1000,
            food_score: 10,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 4 || self.grid_size > 64 {
            return Err("Grid size must be between 4 and 64".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.food_score < 1 {
            return Err("Food score must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Loads settings from a YAML file. A missing file means defaults; an
    /// unreadable or invalid file is a startup error.
    pub fn load_from_yaml_file(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(format!("Failed to read config file {}: {}", path, err)),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let settings: Self = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }
}
