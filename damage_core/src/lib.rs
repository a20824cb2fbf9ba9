//! damage_core - Damage calculation engine
//!
//! This library provides:
//! - DamageEngine: validated damage formula with rounding and a calculation trace
//! - SkillPowerTable: per-level skill power lookup
//! - GameConstants / Roster: tunable constants (TOML) and character data (JSON)
//! - Resolution helpers: manual entries take precedence over looked-up values
//! - Analysis: scenario comparison, optimal skill level, chart data

pub mod analysis;
pub mod config;
pub mod damage;
pub mod error;
pub mod format;
pub mod prelude;
pub mod resolve;
pub mod skill;
pub mod types;

// Re-export core types for convenience
pub use analysis::{
    bar_chart_data, compare_damage_scenarios, find_optimal_skill_level, BarChartEntry,
    OptimalLevel, ScenarioComparison,
};
pub use config::{
    default_constants, default_roster, Character, ConfigError, GameConstants, Roster, Skill,
};
pub use damage::{
    calculate_damage, CalculationStep, CalculationSteps, DamageCalculation, DamageEngine,
    DamageResults, FinalDamages,
};
pub use error::{parse_number, CalculationError, InputField};
pub use skill::{power_at_level, SkillPowerTable, MAX_SKILL_LEVEL};
pub use types::{AdvancedSettings, BattleSettings, DamageKind, Rarity, RoundingMode, SkillType};
