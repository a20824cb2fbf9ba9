//! Optimal skill level search

use crate::config::Skill;
use crate::damage::DamageEngine;
use crate::error::CalculationError;
use crate::resolve::resolve_hit_count;
use crate::types::{BattleSettings, RoundingMode};
use serde::{Deserialize, Serialize};

/// Advantage-critical damage at one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDamage {
    pub level: u32,
    pub damage: u64,
    /// False when the skill's table has no entry for this level
    pub has_power_data: bool,
}

/// The best level and the damage at every level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalLevel {
    pub optimal_level: u32,
    pub max_damage: u64,
    pub damage_at_each_level: Vec<LevelDamage>,
}

/// Evaluate every configured skill level and pick the one with the highest
/// advantage-critical damage (the lowest such level on ties)
///
/// Levels without power data count as 0 power. Fails if the attack or the
/// skill's hit count is invalid for the engine.
pub fn find_optimal_skill_level(
    engine: &DamageEngine,
    skill: &Skill,
    total_attack: f64,
    battle: &BattleSettings,
    rounding_mode: RoundingMode,
) -> Result<OptimalLevel, CalculationError> {
    let constants = engine.constants();
    let hit_count = resolve_hit_count(None, Some(skill), constants.hit_count.default);
    let levels = constants.skill_level.levels();

    let mut damage_at_each_level = Vec::with_capacity(levels.clone().count());
    let mut optimal_level = *levels.start();
    let mut max_damage = 0;

    for level in levels {
        let power = skill.power_at_level(level);
        let calc = engine.compute(total_attack, battle, Some(power), hit_count, rounding_mode)?;
        let damage = calc.results.final_damages.advantage_critical;

        damage_at_each_level.push(LevelDamage {
            level,
            damage,
            has_power_data: skill.power_per_level.get(level).is_some(),
        });

        if damage > max_damage {
            max_damage = damage;
            optimal_level = level;
        }
    }

    Ok(OptimalLevel {
        optimal_level,
        max_damage,
        damage_at_each_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use crate::error::InputField;
    use crate::skill::SkillPowerTable;
    use crate::types::SkillType;

    fn skill(levels: &[(u32, f64)], hit_count: Option<u32>) -> Skill {
        Skill {
            name: "Test".to_string(),
            skill_type: SkillType::Ex,
            power_per_level: SkillPowerTable::from_levels(levels),
            hit_count,
        }
    }

    #[test]
    fn test_picks_highest_level() {
        let engine = DamageEngine::default();
        let s = skill(&[(1, 75.0), (10, 117.0), (15, 117.0)], Some(1));

        let result = find_optimal_skill_level(
            &engine,
            &s,
            1000.0,
            &BattleSettings::default(),
            RoundingMode::Floor,
        )
        .unwrap();

        assert_eq!(result.damage_at_each_level.len(), 15);
        // ties go to the lower level
        assert_eq!(result.optimal_level, 10);
        // 1000 * 1.17 * 1.5 * 1.25 = 2193.75
        assert_eq!(result.max_damage, 2193);
        assert_eq!(result.damage_at_each_level[1].damage, 0);
        assert_eq!(result.damage_at_each_level[0].damage, 1406);
        assert!(result.damage_at_each_level[0].has_power_data);
        assert!(!result.damage_at_each_level[1].has_power_data);
    }

    #[test]
    fn test_uses_configured_levels_and_hits() {
        let constants =
            GameConstants::parse("[skill_level]\nmax = 5\n\n[hit_count]\ndefault = 2").unwrap();
        let engine = DamageEngine::new(constants);
        let s = skill(&[(1, 100.0), (10, 200.0)], None);

        let result = find_optimal_skill_level(
            &engine,
            &s,
            1000.0,
            &BattleSettings::default(),
            RoundingMode::Floor,
        )
        .unwrap();

        assert_eq!(result.damage_at_each_level.len(), 5);
        assert_eq!(result.optimal_level, 1);
        // 1000 * 1.0 * 1.5 * 1.25 * 2
        assert_eq!(result.max_damage, 3750);
    }

    #[test]
    fn test_empty_table() {
        let engine = DamageEngine::default();
        let result = find_optimal_skill_level(
            &engine,
            &skill(&[], None),
            1000.0,
            &BattleSettings::default(),
            RoundingMode::Floor,
        )
        .unwrap();

        assert_eq!(result.optimal_level, 1);
        assert_eq!(result.max_damage, 0);
    }

    #[test]
    fn test_invalid_hit_count_propagates() {
        let engine = DamageEngine::default();
        let err = find_optimal_skill_level(
            &engine,
            &skill(&[(1, 100.0)], Some(0)),
            1000.0,
            &BattleSettings::default(),
            RoundingMode::Floor,
        )
        .unwrap_err();

        assert_eq!(err.field(), InputField::HitCount);
    }
}
