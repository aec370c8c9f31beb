use angle_parser::ExtractorConfig;
use anyhow::{Context, Result};
use motor_command::MotorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub motor: MotorConfig,
    /// Printed when an utterance carries no angle
    #[serde(default = "default_retry_prompt")]
    pub retry_prompt: String,
}

fn default_retry_prompt() -> String {
    "未识别到角度信息，请再试一次（例如：‘运动到90度’）。".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            motor: MotorConfig::default(),
            retry_prompt: default_retry_prompt(),
        }
    }
}

impl Config {
    /// Read the config file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing config: {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cfg = Config::load(dir.path().join("absent.json"))?;
        assert_eq!(cfg, Config::default());
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("angle.json");
        let mut cfg = Config::default();
        cfg.motor.port = "/dev/ttyUSB0".to_string();
        cfg.save(&path)?;
        assert_eq!(Config::load(&path)?, cfg);
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("angle.json");
        fs::write(&path, r#"{"retry_prompt":"again"}"#)?;
        let cfg = Config::load(&path)?;
        assert_eq!(cfg.retry_prompt, "again");
        assert_eq!(cfg.motor, MotorConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("angle.json");
        fs::write(&path, "not json")?;
        assert!(Config::load(&path).is_err());
        Ok(())
    }
}
