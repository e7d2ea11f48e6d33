use serde::{Deserialize, Serialize};

use crate::error::{SubframeError, SubframeResult};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: String, // "error" | "warn" | "info" | "debug" | "trace"
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Minimum alpha for a pixel to count as visible.
    pub threshold: u8,
    pub opaque: char,
    pub transparent: char,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            threshold: 128,
            opaque: '#',
            transparent: '.',
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Compose track frames on the rayon pool.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Settings for the `subframe` command-line front end.
///
/// The compositor itself takes no configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SubframeConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl SubframeConfig {
    pub fn from_toml(contents: &str) -> SubframeResult<Self> {
        toml::from_str(contents).map_err(|e| SubframeError::Config(e.to_string()))
    }

    pub fn load_from_file(path: &std::path::Path) -> SubframeResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> SubframeResult<()> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| SubframeError::Config(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
