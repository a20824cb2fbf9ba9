//! Front-end settings loaded from an optional TOML file

use damage_core::config::{load_roster, ConfigError, GameConstants};
use damage_core::{default_constants, default_roster, AdvancedSettings, BattleSettings, Roster};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Starting state of the calculator
#[derive(Debug, Clone, Deserialize)]
pub struct TuiConfig {
    /// Attack used when no manual attack is entered
    #[serde(default)]
    pub base_attack: Option<f64>,
    #[serde(default)]
    pub battle: BattleSettings,
    #[serde(default)]
    pub advanced: AdvancedSettings,
    /// Replacement for the bundled constants
    #[serde(default)]
    pub constants_path: Option<PathBuf>,
    /// Replacement for the bundled roster
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        TuiConfig {
            base_attack: None,
            battle: BattleSettings::default(),
            advanced: AdvancedSettings::default(),
            constants_path: None,
            roster_path: None,
            log_dir: default_log_dir(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl TuiConfig {
    /// Load from `path`, or use defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => damage_core::config::load_toml(path),
            None => Ok(TuiConfig::default()),
        }
    }

    pub fn constants(&self) -> Result<GameConstants, ConfigError> {
        match &self.constants_path {
            Some(path) => GameConstants::load(path),
            None => Ok(default_constants()),
        }
    }

    pub fn roster(&self) -> Result<Roster, ConfigError> {
        match &self.roster_path {
            Some(path) => load_roster(path),
            None => Ok(default_roster()),
        }
    }
}
