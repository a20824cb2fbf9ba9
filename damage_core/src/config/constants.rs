//! Game constants configuration

use super::ConfigError;
use crate::skill::MAX_SKILL_LEVEL;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Tunable game constants: valid input ranges, defaults and base multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default = "ValueRange::attack_power", deserialize_with = "attack_power_range")]
    pub attack_power: ValueRange,
    #[serde(default)]
    pub skill_power: SkillPowerRange,
    #[serde(default = "ValueRange::hit_count", deserialize_with = "hit_count_range")]
    pub hit_count: ValueRange,
    #[serde(default)]
    pub skill_level: LevelRange,
    #[serde(default)]
    pub multipliers: Multipliers,
    #[serde(default)]
    pub bonus: BonusLimits,
    #[serde(default = "ValueRange::defense", deserialize_with = "defense_range")]
    pub defense: ValueRange,
}

/// Inclusive numeric range with a default value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

/// A range table as written in the file; absent keys keep the built-in value
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialRange {
    default: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl PartialRange {
    fn over(self, base: ValueRange) -> ValueRange {
        ValueRange {
            default: self.default.unwrap_or(base.default),
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
        }
    }
}

fn attack_power_range<'de, D: Deserializer<'de>>(d: D) -> Result<ValueRange, D::Error> {
    PartialRange::deserialize(d).map(|p| p.over(ValueRange::attack_power()))
}

fn hit_count_range<'de, D: Deserializer<'de>>(d: D) -> Result<ValueRange, D::Error> {
    PartialRange::deserialize(d).map(|p| p.over(ValueRange::hit_count()))
}

fn defense_range<'de, D: Deserializer<'de>>(d: D) -> Result<ValueRange, D::Error> {
    PartialRange::deserialize(d).map(|p| p.over(ValueRange::defense()))
}

impl ValueRange {
    pub fn new(default: f64, min: f64, max: f64) -> Self {
        ValueRange { default, min, max }
    }

    fn attack_power() -> Self {
        ValueRange::new(1000.0, 0.0, 1_000_000.0)
    }

    fn hit_count() -> Self {
        ValueRange::new(1.0, 1.0, 20.0)
    }

    fn defense() -> Self {
        ValueRange::new(0.0, 0.0, 1_000_000.0)
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !(self.min.is_finite() && self.max.is_finite() && self.default.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{name}: bounds and default must be finite"
            )));
        }
        if self.min > self.max {
            return Err(ConfigError::ValidationError(format!(
                "{name}: min {} is greater than max {}",
                self.min, self.max
            )));
        }
        if !self.contains(self.default) {
            return Err(ConfigError::ValidationError(format!(
                "{name}: default {} is outside {}-{}",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Skill power range plus the divisor that turns power into a fraction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillPowerRange {
    #[serde(default = "default_skill_power")]
    pub default: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default = "default_skill_power_max")]
    pub max: f64,
    /// 150 power / 100 = 1.5x
    #[serde(default = "default_percent_divisor")]
    pub percent_divisor: f64,
}

impl SkillPowerRange {
    pub fn as_range(&self) -> ValueRange {
        ValueRange::new(self.default, self.min, self.max)
    }
}

impl Default for SkillPowerRange {
    fn default() -> Self {
        SkillPowerRange {
            default: default_skill_power(),
            min: 0.0,
            max: default_skill_power_max(),
            percent_divisor: default_percent_divisor(),
        }
    }
}

fn default_skill_power() -> f64 {
    100.0
}
fn default_skill_power_max() -> f64 {
    10_000.0
}
fn default_percent_divisor() -> f64 {
    100.0
}

/// Valid skill levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    #[serde(default = "default_min_level")]
    pub min: u32,
    #[serde(default = "default_max_level")]
    pub max: u32,
}

impl Default for LevelRange {
    fn default() -> Self {
        LevelRange {
            min: default_min_level(),
            max: default_max_level(),
        }
    }
}

impl LevelRange {
    /// Clamp `level` into `[min, max]`
    pub fn clamp(&self, level: i64) -> u32 {
        level.clamp(self.min as i64, self.max as i64) as u32
    }

    /// Every level in the range, lowest first
    pub fn levels(&self) -> std::ops::RangeInclusive<u32> {
        self.min..=self.max
    }
}

fn default_min_level() -> u32 {
    1
}
fn default_max_level() -> u32 {
    15
}

/// Base multipliers the bonuses are added to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    /// Base critical multiplier (1.5 = 150%)
    #[serde(default = "default_critical_base")]
    pub critical_base: f64,
    /// Base advantage multiplier (1.25 = 125%)
    #[serde(default = "default_advantage_base")]
    pub advantage_base: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Multipliers {
            critical_base: default_critical_base(),
            advantage_base: default_advantage_base(),
        }
    }
}

fn default_critical_base() -> f64 {
    1.5
}
fn default_advantage_base() -> f64 {
    1.25
}

/// Upper limits for the percent bonuses entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusLimits {
    #[serde(default = "default_bonus_max")]
    pub critical_max: f64,
    #[serde(default = "default_bonus_max")]
    pub advantage_max: f64,
}

impl Default for BonusLimits {
    fn default() -> Self {
        BonusLimits {
            critical_max: default_bonus_max(),
            advantage_max: default_bonus_max(),
        }
    }
}

fn default_bonus_max() -> f64 {
    1000.0
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants::builtin()
    }
}

impl GameConstants {
    /// The built-in defaults, identical to the bundled `constants.toml`
    pub fn builtin() -> Self {
        GameConstants {
            attack_power: ValueRange::attack_power(),
            skill_power: SkillPowerRange::default(),
            hit_count: ValueRange::hit_count(),
            skill_level: LevelRange::default(),
            multipliers: Multipliers::default(),
            bonus: BonusLimits::default(),
            defense: ValueRange::defense(),
        }
    }

    /// Load constants from a TOML file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string and validate them
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject ranges that could never accept a value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.attack_power.validate("attack_power")?;
        self.skill_power.as_range().validate("skill_power")?;
        self.hit_count.validate("hit_count")?;
        self.defense.validate("defense")?;

        if self.skill_power.percent_divisor <= 0.0 {
            return Err(ConfigError::ValidationError(
                "skill_power: percent_divisor must be positive".to_string(),
            ));
        }
        if self.skill_level.min == 0
            || self.skill_level.min > self.skill_level.max
            || self.skill_level.max > MAX_SKILL_LEVEL
        {
            return Err(ConfigError::ValidationError(format!(
                "skill_level: invalid range {}-{}",
                self.skill_level.min, self.skill_level.max
            )));
        }
        // critical and advantage totals never fall below the normal total
        if !(self.multipliers.critical_base >= 1.0 && self.multipliers.advantage_base >= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "multipliers: base multipliers must be at least 1.0 (critical {}, advantage {})",
                self.multipliers.critical_base, self.multipliers.advantage_base
            )));
        }
        if self.bonus.critical_max < 0.0 || self.bonus.advantage_max < 0.0 {
            return Err(ConfigError::ValidationError(
                "bonus: limits cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the bundled game constants
pub fn default_constants() -> GameConstants {
    let toml = include_str!("../../config/constants.toml");
    GameConstants::parse(toml).unwrap_or_else(|_| GameConstants::builtin())
}
