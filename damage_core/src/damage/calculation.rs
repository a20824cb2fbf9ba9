//! Damage calculation - turning attack, skill and battle settings into results

use super::steps::{build_calculation_steps, TraceInput};
use super::{DamageCalculation, DamageResults, FinalDamages};
use crate::config::GameConstants;
use crate::error::{ensure_finite, ensure_in_range, CalculationError, InputField};
use crate::types::{BattleSettings, RoundingMode};

/// The damage formula, parameterized by game constants
///
/// ```text
/// base_damage          = max(0, total_attack - enemy_defense)
/// skill_power_percent  = skill_power / 100
/// critical_multiplier  = 1.5  + critical_bonus / 100
/// advantage_multiplier = 1.25 + advantage_bonus / 100
/// damage               = base × skill% × [crit] × [adv] × hits, then rounded
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageEngine {
    constants: GameConstants,
}

impl DamageEngine {
    pub fn new(constants: GameConstants) -> Self {
        DamageEngine { constants }
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Run one calculation
    ///
    /// `skill_power` of `None` uses the configured default skill power (100),
    /// so an unset skill deals 100% of base damage. Battle settings are taken
    /// as given. Fails before any arithmetic if an input is not finite or is
    /// outside its configured range.
    pub fn compute(
        &self,
        total_attack: f64,
        battle: &BattleSettings,
        skill_power: Option<f64>,
        hit_count: f64,
        rounding_mode: RoundingMode,
    ) -> Result<DamageCalculation, CalculationError> {
        let (total_attack, skill_power, hit_count) =
            self.validate(total_attack, skill_power, hit_count)?;

        let multipliers = &self.constants.multipliers;
        let percent_divisor = self.constants.skill_power.percent_divisor;

        // Step 1: Base damage, never negative
        let base_damage = (total_attack - battle.enemy_defense).max(0.0);

        // Step 2: Skill power as a fraction
        let skill_power_percent = skill_power / percent_divisor;

        // Step 3-4: Multipliers
        let critical_multiplier = multipliers.critical_base + battle.critical_damage_bonus / 100.0;
        let advantage_multiplier = multipliers.advantage_base + battle.advantage_damage_bonus / 100.0;

        // Step 5-6: Raw products, each rounded independently
        let scaled = base_damage * skill_power_percent;
        let final_damages = FinalDamages {
            normal: to_damage(scaled * hit_count, rounding_mode),
            critical: to_damage(scaled * critical_multiplier * hit_count, rounding_mode),
            advantage_normal: to_damage(scaled * advantage_multiplier * hit_count, rounding_mode),
            advantage_critical: to_damage(
                scaled * critical_multiplier * advantage_multiplier * hit_count,
                rounding_mode,
            ),
        };

        let results = DamageResults {
            total_attack,
            enemy_defense: battle.enemy_defense,
            base_damage,
            skill_power_percent,
            critical_multiplier,
            advantage_multiplier,
            hit_count,
            final_damages,
        };

        let steps = build_calculation_steps(
            &results,
            &TraceInput {
                skill_power,
                percent_divisor,
                critical_base: multipliers.critical_base,
                advantage_base: multipliers.advantage_base,
                critical_damage_bonus: battle.critical_damage_bonus,
                advantage_damage_bonus: battle.advantage_damage_bonus,
            },
        );

        tracing::debug!(
            total_attack,
            base_damage,
            normal = final_damages.normal,
            advantage_critical = final_damages.advantage_critical,
            rounding = %rounding_mode,
            "damage calculated"
        );

        Ok(DamageCalculation { results, steps })
    }

    /// Check the three numeric inputs, resolving an absent skill power
    fn validate(
        &self,
        total_attack: f64,
        skill_power: Option<f64>,
        hit_count: f64,
    ) -> Result<(f64, f64, f64), CalculationError> {
        let attack_range = &self.constants.attack_power;
        let total_attack = ensure_finite(InputField::TotalAttack, total_attack)?;
        ensure_in_range(
            InputField::TotalAttack,
            total_attack,
            attack_range.min,
            attack_range.max,
        )?;

        let power_range = &self.constants.skill_power;
        let skill_power = match skill_power {
            Some(power) => {
                let power = ensure_finite(InputField::SkillPower, power)?;
                ensure_in_range(InputField::SkillPower, power, power_range.min, power_range.max)?
            }
            None => power_range.default,
        };

        let hit_range = &self.constants.hit_count;
        let hit_count = ensure_finite(InputField::HitCount, hit_count)?;
        ensure_in_range(InputField::HitCount, hit_count, hit_range.min, hit_range.max)?;

        Ok((total_attack, skill_power, hit_count))
    }
}

/// Round a raw product into a whole, non-negative damage value
fn to_damage(raw: f64, mode: RoundingMode) -> u64 {
    let rounded = mode.apply(raw);
    if rounded.is_nan() || rounded <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX
    rounded as u64
}

/// Calculate damage with the built-in game constants
pub fn calculate_damage(
    total_attack: f64,
    battle: &BattleSettings,
    skill_power: Option<f64>,
    hit_count: f64,
    rounding_mode: RoundingMode,
) -> Result<DamageCalculation, CalculationError> {
    DamageEngine::default().compute(total_attack, battle, skill_power, hit_count, rounding_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Multipliers, ValueRange};
    use proptest::prelude::*;

    fn no_bonus() -> BattleSettings {
        BattleSettings::default()
    }

    #[test]
    fn test_scenario() {
        let battle = BattleSettings::new(300.0, 15.0, 10.0);
        let calc = calculate_damage(1500.0, &battle, Some(150.0), 1.0, RoundingMode::Floor).unwrap();
        let r = &calc.results;

        assert_eq!(r.base_damage, 1200.0);
        assert!((r.skill_power_percent - 1.5).abs() < 1e-12);
        assert!((r.critical_multiplier - 1.65).abs() < 1e-12);
        assert!((r.advantage_multiplier - 1.35).abs() < 1e-12);

        assert_eq!(r.final_damages.normal, 1800);
        assert_eq!(r.final_damages.critical, 2970);
        assert_eq!(r.final_damages.advantage_normal, 2430);
        assert_eq!(r.final_damages.advantage_critical, 4009);
    }

    #[test]
    fn test_scenario_round_mode() {
        // advantage critical raw value is 4009.5
        let battle = BattleSettings::new(300.0, 15.0, 10.0);
        let calc = calculate_damage(1500.0, &battle, Some(150.0), 1.0, RoundingMode::Round).unwrap();
        assert_eq!(calc.results.final_damages.advantage_critical, 4010);

        let calc = calculate_damage(1500.0, &battle, Some(150.0), 1.0, RoundingMode::Ceil).unwrap();
        assert_eq!(calc.results.final_damages.advantage_critical, 4010);
        assert_eq!(calc.results.final_damages.normal, 1800);
    }

    #[test]
    fn test_floor_identity() {
        for attack in [0.0, 1.0, 999.0, 123_456.0, 1_000_000.0] {
            let calc = calculate_damage(attack, &no_bonus(), Some(100.0), 1.0, RoundingMode::Floor).unwrap();
            assert_eq!(calc.results.final_damages.normal, attack as u64);
        }
    }

    #[test]
    fn test_rounding_of_raw_products() {
        // 1237 * 10% = 123.7
        let calc = calculate_damage(1237.0, &no_bonus(), Some(10.0), 1.0, RoundingMode::Floor).unwrap();
        assert_eq!(calc.results.final_damages.normal, 123);
        let calc = calculate_damage(1237.0, &no_bonus(), Some(10.0), 1.0, RoundingMode::Ceil).unwrap();
        assert_eq!(calc.results.final_damages.normal, 124);
        let calc = calculate_damage(1237.0, &no_bonus(), Some(10.0), 1.0, RoundingMode::Round).unwrap();
        assert_eq!(calc.results.final_damages.normal, 124);

        // 1233 * 10% = 123.3
        let calc = calculate_damage(1233.0, &no_bonus(), Some(10.0), 1.0, RoundingMode::Round).unwrap();
        assert_eq!(calc.results.final_damages.normal, 123);
        let calc = calculate_damage(1233.0, &no_bonus(), Some(10.0), 1.0, RoundingMode::Ceil).unwrap();
        assert_eq!(calc.results.final_damages.normal, 124);
    }

    #[test]
    fn test_defense_saturation() {
        let battle = BattleSettings::new(5000.0, 50.0, 50.0);
        let calc = calculate_damage(1500.0, &battle, Some(150.0), 3.0, RoundingMode::Ceil).unwrap();
        assert_eq!(calc.results.base_damage, 0.0);
        assert_eq!(calc.results.final_damages, FinalDamages::default());
        assert!(calc.results.is_fully_blocked());
        assert_eq!(calc.steps.base_damage.calculation, "1500 - 5000");
        assert_eq!(calc.steps.base_damage.result, 0.0);
    }

    #[test]
    fn test_zero_battle_settings_ok() {
        let calc = calculate_damage(100.0, &no_bonus(), Some(100.0), 1.0, RoundingMode::Floor).unwrap();
        assert_eq!(calc.results.critical_multiplier, 1.5);
        assert_eq!(calc.results.advantage_multiplier, 1.25);
        assert_eq!(calc.results.final_damages.critical, 150);
        assert_eq!(calc.results.final_damages.advantage_normal, 125);
        // 100 * 1.5 * 1.25 = 187.5
        assert_eq!(calc.results.final_damages.advantage_critical, 187);
    }

    #[test]
    fn test_missing_skill_power_uses_default() {
        let with_default = calculate_damage(800.0, &no_bonus(), None, 2.0, RoundingMode::Floor).unwrap();
        let explicit = calculate_damage(800.0, &no_bonus(), Some(100.0), 2.0, RoundingMode::Floor).unwrap();
        assert_eq!(with_default.results, explicit.results);
        assert_eq!(with_default.results.final_damages.normal, 1600);
        assert_eq!(with_default.steps.skill_power.calculation, "100.0 / 100");
    }

    #[test]
    fn test_multi_hit() {
        let calc = calculate_damage(1100.0, &BattleSettings::new(100.0, 0.0, 0.0), Some(28.08), 5.0, RoundingMode::Floor)
            .unwrap();
        // 1000 * 0.2808 * 5 = 1404
        assert_eq!(calc.results.final_damages.normal, 1404);
        let line = calc.steps.final_damage.line(crate::types::DamageKind::Normal).unwrap();
        assert_eq!(line.calculation, "1000 × 0.281 × 5");
    }

    #[test]
    fn test_hit_count_below_range() {
        let err = calculate_damage(1000.0, &no_bonus(), Some(100.0), 0.0, RoundingMode::Floor).unwrap_err();
        assert_eq!(
            err,
            CalculationError::OutOfRange {
                field: InputField::HitCount,
                value: 0.0,
                min: 1.0,
                max: 20.0,
            }
        );
    }

    #[test]
    fn test_hit_count_above_range() {
        let err = calculate_damage(1000.0, &no_bonus(), Some(100.0), 21.0, RoundingMode::Floor).unwrap_err();
        assert_eq!(err.field(), InputField::HitCount);
    }

    #[test]
    fn test_nan_attack() {
        let err = calculate_damage(f64::NAN, &no_bonus(), Some(100.0), 1.0, RoundingMode::Floor).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidNumber { field: InputField::TotalAttack, .. }
        ));
    }

    #[test]
    fn test_attack_out_of_range() {
        let err = calculate_damage(-1.0, &no_bonus(), Some(100.0), 1.0, RoundingMode::Floor).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::OutOfRange { field: InputField::TotalAttack, .. }
        ));
        assert!(calculate_damage(1_000_001.0, &no_bonus(), None, 1.0, RoundingMode::Floor).is_err());
    }

    #[test]
    fn test_skill_power_validation() {
        let err = calculate_damage(1000.0, &no_bonus(), Some(f64::INFINITY), 1.0, RoundingMode::Floor).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::InvalidNumber { field: InputField::SkillPower, .. }
        ));

        let err = calculate_damage(1000.0, &no_bonus(), Some(10_001.0), 1.0, RoundingMode::Floor).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::OutOfRange { field: InputField::SkillPower, .. }
        ));
    }

    #[test]
    fn test_attack_checked_before_hit_count() {
        let err = calculate_damage(f64::NAN, &no_bonus(), Some(100.0), 0.0, RoundingMode::Floor).unwrap_err();
        assert_eq!(err.field(), InputField::TotalAttack);
    }

    #[test]
    fn test_custom_constants() {
        let mut constants = GameConstants::builtin();
        constants.multipliers = Multipliers {
            critical_base: 2.0,
            advantage_base: 1.5,
        };
        constants.hit_count = ValueRange::new(1.0, 1.0, 50.0);
        let engine = DamageEngine::new(constants);

        let calc = engine
            .compute(200.0, &no_bonus(), Some(100.0), 30.0, RoundingMode::Floor)
            .unwrap();
        assert_eq!(calc.results.final_damages.critical, 200 * 2 * 30);
        assert_eq!(calc.results.final_damages.advantage_critical, 200 * 3 * 30);
        assert_eq!(calc.steps.critical_multiplier.formula, "2 + Critical Bonus%");
    }

    #[test]
    fn test_idempotent() {
        let battle = BattleSettings::new(123.0, 33.3, 7.7);
        let a = calculate_damage(4567.8, &battle, Some(87.5), 3.0, RoundingMode::Round).unwrap();
        let b = calculate_damage(4567.8, &battle, Some(87.5), 3.0, RoundingMode::Round).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.results.base_damage.to_bits(), b.results.base_damage.to_bits());
    }

    fn any_mode() -> impl Strategy<Value = RoundingMode> {
        prop_oneof![
            Just(RoundingMode::Floor),
            Just(RoundingMode::Ceil),
            Just(RoundingMode::Round),
        ]
    }

    proptest! {
        #[test]
        fn prop_non_negative_and_ordered(
            attack in 0.0f64..=1_000_000.0,
            defense in 0.0f64..=1_000_000.0,
            crit in 0.0f64..=1000.0,
            adv in 0.0f64..=1000.0,
            power in 0.0f64..=10_000.0,
            hits in 1u32..=20,
            mode in any_mode(),
        ) {
            let battle = BattleSettings::new(defense, crit, adv);
            let calc = calculate_damage(attack, &battle, Some(power), hits as f64, mode).unwrap();
            let d = calc.results.final_damages;

            prop_assert!(calc.results.base_damage >= 0.0);
            prop_assert!(d.advantage_critical >= d.normal);
            prop_assert!(d.advantage_critical >= d.critical);
            prop_assert!(d.advantage_critical >= d.advantage_normal);
        }

        #[test]
        fn prop_critical_bonus_monotonic(
            attack in 0.0f64..=100_000.0,
            crit in 0.0f64..=500.0,
            extra in 0.0f64..=500.0,
            power in 0.0f64..=1000.0,
            hits in 1u32..=20,
            mode in any_mode(),
        ) {
            let low = BattleSettings::new(0.0, crit, 10.0);
            let high = BattleSettings::new(0.0, crit + extra, 10.0);
            let a = calculate_damage(attack, &low, Some(power), hits as f64, mode).unwrap();
            let b = calculate_damage(attack, &high, Some(power), hits as f64, mode).unwrap();

            prop_assert!(b.results.final_damages.critical >= a.results.final_damages.critical);
            prop_assert!(
                b.results.final_damages.advantage_critical >= a.results.final_damages.advantage_critical
            );
        }

        #[test]
        fn prop_defense_saturates(
            attack in 0.0f64..=100_000.0,
            surplus in 0.0f64..=100_000.0,
            power in 0.0f64..=10_000.0,
            mode in any_mode(),
        ) {
            let battle = BattleSettings::new(attack + surplus, 100.0, 100.0);
            let calc = calculate_damage(attack, &battle, Some(power), 20.0, mode).unwrap();
            prop_assert_eq!(calc.results.final_damages, FinalDamages::default());
        }

        #[test]
        fn prop_floor_identity(attack in 0u32..=1_000_000) {
            let calc = calculate_damage(
                attack as f64,
                &BattleSettings::default(),
                Some(100.0),
                1.0,
                RoundingMode::Floor,
            ).unwrap();
            prop_assert_eq!(calc.results.final_damages.normal, attack as u64);
        }
    }
}
