//! Input resolution - explicit values win over derived ones
//!
//! These run once before the engine so the engine itself never has to know
//! whether a value was typed in or looked up.

use crate::config::{LevelRange, Skill};

/// Clamp a skill level into the configured level range
pub fn clamp_skill_level(level: i64, range: &LevelRange) -> u32 {
    range.clamp(level)
}

/// Total attack: the manual entry if present, else the base attack
pub fn resolve_total_attack(manual: Option<f64>, base_attack: f64) -> f64 {
    manual.unwrap_or(base_attack)
}

/// Skill power: manual entry, else the skill's power at `level`
///
/// `None` means no value is known and the engine default applies.
pub fn resolve_skill_power(manual: Option<f64>, skill: Option<&Skill>, level: u32) -> Option<f64> {
    manual.or_else(|| skill.map(|s| s.power_at_level(level)))
}

/// Hit count: manual entry, else the skill's listed count, else `default_hits`
pub fn resolve_hit_count(manual: Option<f64>, skill: Option<&Skill>, default_hits: f64) -> f64 {
    manual
        .or_else(|| skill.and_then(|s| s.hit_count).map(f64::from))
        .unwrap_or(default_hits)
}
