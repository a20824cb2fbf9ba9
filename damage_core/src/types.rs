//! Core types shared by the engine and its callers

use serde::{Deserialize, Serialize};
use std::fmt;

/// How raw (fractional) damage is turned into a whole number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum RoundingMode {
    /// Round toward negative infinity
    #[default]
    Floor,
    /// Round toward positive infinity
    Ceil,
    /// Round to nearest, ties away from zero
    Round,
}

impl RoundingMode {
    /// Get all rounding modes
    pub fn all() -> &'static [RoundingMode] {
        &[RoundingMode::Floor, RoundingMode::Ceil, RoundingMode::Round]
    }

    /// Parse a mode name. Unknown names fall back to `Floor`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "ceil" => RoundingMode::Ceil,
            "round" => RoundingMode::Round,
            _ => RoundingMode::Floor,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::Floor => "floor",
            RoundingMode::Ceil => "ceil",
            RoundingMode::Round => "round",
        }
    }

    /// Apply the rounding policy. Negative zero comes back as positive zero.
    pub fn apply(&self, value: f64) -> f64 {
        let rounded = match self {
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceil => value.ceil(),
            RoundingMode::Round => value.round(),
        };
        // -0.0 + 0.0 == +0.0
        rounded + 0.0
    }

    /// Cycle to the next mode (floor → ceil → round → floor)
    pub fn next(&self) -> Self {
        match self {
            RoundingMode::Floor => RoundingMode::Ceil,
            RoundingMode::Ceil => RoundingMode::Round,
            RoundingMode::Round => RoundingMode::Floor,
        }
    }
}

impl From<&str> for RoundingMode {
    fn from(s: &str) -> Self {
        RoundingMode::parse(s)
    }
}

impl From<String> for RoundingMode {
    fn from(s: String) -> Self {
        RoundingMode::parse(&s)
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target-side settings for one calculation
///
/// Bonuses are in percent units: `15.0` means +15% (+0.15 to the multiplier).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleSettings {
    /// Enemy defense, subtracted from total attack
    #[serde(default)]
    pub enemy_defense: f64,
    /// Added on top of the base critical multiplier
    #[serde(default)]
    pub critical_damage_bonus: f64,
    /// Added on top of the base advantage multiplier
    #[serde(default)]
    pub advantage_damage_bonus: f64,
}

impl BattleSettings {
    pub fn new(enemy_defense: f64, critical_damage_bonus: f64, advantage_damage_bonus: f64) -> Self {
        BattleSettings {
            enemy_defense,
            critical_damage_bonus,
            advantage_damage_bonus,
        }
    }
}

/// Calculation preferences owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    /// Base critical rate in percent. Informational, not used in the formula.
    #[serde(default = "default_base_critical_rate")]
    pub base_critical_rate: f64,
    #[serde(default)]
    pub rounding_mode: RoundingMode,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        AdvancedSettings {
            base_critical_rate: default_base_critical_rate(),
            rounding_mode: RoundingMode::Floor,
        }
    }
}

fn default_base_critical_rate() -> f64 {
    5.0
}

/// The four damage outcomes the calculator reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    Normal,
    Critical,
    AdvantageNormal,
    AdvantageCritical,
}

impl DamageKind {
    /// Get all damage kinds in display order
    pub fn all() -> &'static [DamageKind] {
        &[
            DamageKind::Normal,
            DamageKind::Critical,
            DamageKind::AdvantageNormal,
            DamageKind::AdvantageCritical,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DamageKind::Normal => "Normal",
            DamageKind::Critical => "Critical",
            DamageKind::AdvantageNormal => "Advantage",
            DamageKind::AdvantageCritical => "Advantage Critical",
        }
    }

    /// Whether the critical multiplier applies
    pub fn is_critical(&self) -> bool {
        matches!(self, DamageKind::Critical | DamageKind::AdvantageCritical)
    }

    /// Whether the advantage multiplier applies
    pub fn has_advantage(&self) -> bool {
        matches!(self, DamageKind::AdvantageNormal | DamageKind::AdvantageCritical)
    }
}

/// Skill category as listed in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillType {
    /// Extra skill
    #[serde(rename = "EX")]
    Ex,
    /// Active skill
    #[serde(rename = "AS")]
    Active,
    /// Passive skill
    #[serde(rename = "PS")]
    Passive,
}

impl SkillType {
    pub fn code(&self) -> &'static str {
        match self {
            SkillType::Ex => "EX",
            SkillType::Active => "AS",
            SkillType::Passive => "PS",
        }
    }
}

/// Character rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    R,
    SR,
    SSR,
}
