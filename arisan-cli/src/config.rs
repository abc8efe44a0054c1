use arisan_core::{ArisanConfig, ArisanError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub verbose: bool,
    pub animation: AnimationConfig,
    pub core: ArisanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub duration_ms: u64,
    pub frame_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            verbose: false,
            animation: AnimationConfig::default(),
            core: ArisanConfig::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 1200,
            frame_ms: 50,
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arisan")
}

impl CliConfig {
    /// Load `config.json` from the data directory, falling back to defaults
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        let mut config = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str::<CliConfig>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CliConfig::default(),
            Err(e) => return Err(e.into()),
        };

        // the directory we were loaded from wins over whatever the file says
        config.data_dir = data_dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.animation.enabled && self.animation.frame_ms == 0 {
            return Err(ArisanError::config("Animation frame interval must be greater than 0"));
        }
        self.core.validate()
    }
}
