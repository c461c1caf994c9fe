use std::path::Path;

use crate::ai::{Heuristic, HeuristicWeights, SearchConfig, WindowHeuristic};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Computer,
}

/// One seat at the table. `depth` only matters for computer players.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub name: String,
    pub kind: PlayerKind,
    pub depth: u32,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        PlayerConfig {
            name: name.into(),
            kind: PlayerKind::Human,
            ..Default::default()
        }
    }

    pub fn computer(name: impl Into<String>, depth: u32) -> Self {
        PlayerConfig {
            name: name.into(),
            kind: PlayerKind::Computer,
            depth,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            name: "Player".to_string(),
            kind: PlayerKind::Human,
            depth: 4,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
    pub search: SearchConfig,
    pub heuristic: HeuristicWeights,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            first: PlayerConfig::human("Player"),
            second: PlayerConfig::computer("Computer", 4),
            search: SearchConfig::default(),
            heuristic: HeuristicWeights::default(),
        }
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn players(&self) -> [&PlayerConfig; 2] {
        [&self.first, &self.second]
    }

    /// Set the look-ahead of every computer player.
    pub fn override_depth(&mut self, depth: u32) {
        for player in [&mut self.first, &mut self.second] {
            if player.kind == PlayerKind::Computer {
                player.depth = depth;
            }
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in [("first", &self.first), ("second", &self.second)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{seat}.name must not be empty"
                )));
            }
            if player.kind == PlayerKind::Computer && player.depth > self.search.max_depth {
                return Err(ConfigError::Validation(format!(
                    "{seat}.depth must be <= search.max_depth ({})",
                    self.search.max_depth
                )));
            }
        }

        let w = &self.heuristic;
        if [w.own_three, w.opponent_three, w.two, w.one]
            .iter()
            .any(|&v| v < 0)
        {
            return Err(ConfigError::Validation(
                "heuristic weights must be >= 0".into(),
            ));
        }

        let bound = WindowHeuristic::new(*w).bound();
        if self.search.win_value <= bound {
            return Err(ConfigError::Validation(format!(
                "search.win_value must be > {bound} (largest heuristic score)"
            )));
        }

        Ok(())
    }
}
