use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub animation: AnimationConfig,
    pub input: InputConfig,
}

/// Timing and toggles for the decorative animations. The defaults match the
/// classic pacing: a 50 ms drop step, three bounces, five blinks.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Milliseconds per row while a piece falls.
    pub drop_interval_ms: u64,
    /// How many times a landed piece lifts and settles.
    pub bounce_cycles: u32,
    pub bounce_interval_ms: u64,
    /// How many times the winning line flashes.
    pub blink_cycles: u32,
    pub blink_interval_ms: u64,
    /// Fireworks on the game-over screen after a win.
    pub fireworks: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Capture mouse events so clicks drop pieces and hover moves the
    /// selector.
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            animation: AnimationConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            drop_interval_ms: 50,
            bounce_cycles: 3,
            bounce_interval_ms: 100,
            blink_cycles: 5,
            blink_interval_ms: 200,
            fireworks: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { mouse: true }
    }
}

impl AnimationConfig {
    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms)
    }

    pub fn bounce_interval(&self) -> Duration {
        Duration::from_millis(self.bounce_interval_ms)
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.drop_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.drop_interval_ms must be > 0".into(),
            ));
        }
        if self.animation.bounce_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.bounce_interval_ms must be > 0".into(),
            ));
        }
        if self.animation.blink_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.blink_interval_ms must be > 0".into(),
            ));
        }
        if self.animation.blink_cycles == 0 {
            return Err(ConfigError::Validation(
                "animation.blink_cycles must be > 0".into(),
            ));
        }
        Ok(())
    }
}
