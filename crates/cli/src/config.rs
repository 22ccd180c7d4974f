use serde::{Deserialize, Serialize};
use std::path::Path;

/// Driver configuration, read from `cormorant.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Search depth in whole turns (two plies each).
    pub depth_turns: u32,
    /// Scorer name: "material", "mobility", or "random".
    pub scorer: String,
    /// Seed for the random scorer.
    pub seed: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            depth_turns: 2,
            scorer: "material".to_string(),
            seed: 7,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<CliConfig, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// The configuration to run with: the file if it exists, defaults if not.
    /// A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<CliConfig, String> {
        if path.exists() {
            CliConfig::load(path)
        } else {
            Ok(CliConfig::default())
        }
    }
}
