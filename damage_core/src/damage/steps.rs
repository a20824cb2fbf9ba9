//! Calculation trace - the arithmetic behind a result, for display
//!
//! Formula strings are English templates; callers may substitute localized
//! text. Numbers shown here are display-rounded and never feed back into
//! the calculation.

use super::{DamageResults, FinalDamages};
use crate::types::DamageKind;
use serde::{Deserialize, Serialize};

/// One intermediate quantity with its formula and substituted expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub label: String,
    pub formula: String,
    pub calculation: String,
    pub result: f64,
}

/// Formula, expression and rounded result for one damage outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDamageLine {
    pub kind: DamageKind,
    pub formula: String,
    pub calculation: String,
    pub result: u64,
}

/// The last step: all four final damages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDamageStep {
    pub label: String,
    pub formula: String,
    pub lines: Vec<FinalDamageLine>,
    pub results: FinalDamages,
}

impl FinalDamageStep {
    pub fn line(&self, kind: DamageKind) -> Option<&FinalDamageLine> {
        self.lines.iter().find(|l| l.kind == kind)
    }
}

/// Ordered five-step trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationSteps {
    pub base_damage: CalculationStep,
    pub skill_power: CalculationStep,
    pub critical_multiplier: CalculationStep,
    pub advantage_multiplier: CalculationStep,
    pub final_damage: FinalDamageStep,
}

impl CalculationSteps {
    /// Steps 1-4 in order
    pub fn scalar_steps(&self) -> [&CalculationStep; 4] {
        [
            &self.base_damage,
            &self.skill_power,
            &self.critical_multiplier,
            &self.advantage_multiplier,
        ]
    }
}

/// Values the trace needs that are not part of `DamageResults`
pub(crate) struct TraceInput {
    pub skill_power: f64,
    pub percent_divisor: f64,
    pub critical_base: f64,
    pub advantage_base: f64,
    pub critical_damage_bonus: f64,
    pub advantage_damage_bonus: f64,
}

/// Round to 3 decimals for display
fn display3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub(crate) fn build_calculation_steps(results: &DamageResults, input: &TraceInput) -> CalculationSteps {
    let base_damage = CalculationStep {
        label: "Base Damage".to_string(),
        formula: "Total Attack - Enemy Defense".to_string(),
        calculation: format!("{} - {}", results.total_attack, results.enemy_defense),
        result: results.base_damage,
    };

    let skill_power = CalculationStep {
        label: "Skill Power (%)".to_string(),
        formula: format!("Skill Power / {}", input.percent_divisor),
        calculation: format!("{:.1} / {}", input.skill_power, input.percent_divisor),
        result: display3(results.skill_power_percent),
    };

    let critical_multiplier = CalculationStep {
        label: "Critical Multiplier".to_string(),
        formula: format!("{} + Critical Bonus%", input.critical_base),
        calculation: format!(
            "{} + {:.2}",
            input.critical_base,
            input.critical_damage_bonus / 100.0
        ),
        result: display3(results.critical_multiplier),
    };

    let advantage_multiplier = CalculationStep {
        label: "Advantage Multiplier".to_string(),
        formula: format!("{} + Advantage Bonus%", input.advantage_base),
        calculation: format!(
            "{} + {:.2}",
            input.advantage_base,
            input.advantage_damage_bonus / 100.0
        ),
        result: display3(results.advantage_multiplier),
    };

    let lines = DamageKind::all()
        .iter()
        .map(|&kind| final_damage_line(kind, results))
        .collect();

    let final_damage = FinalDamageStep {
        label: "Final Damage".to_string(),
        formula: "Base Damage × Skill Power% × Critical × Advantage × Hit Count".to_string(),
        lines,
        results: results.final_damages,
    };

    CalculationSteps {
        base_damage,
        skill_power,
        critical_multiplier,
        advantage_multiplier,
        final_damage,
    }
}

fn final_damage_line(kind: DamageKind, results: &DamageResults) -> FinalDamageLine {
    let mut formula = vec!["Base Damage", "Skill Power%"];
    let mut calculation = vec![
        format!("{:.0}", results.base_damage),
        format!("{:.3}", results.skill_power_percent),
    ];

    if kind.is_critical() {
        formula.push("Critical Multiplier");
        calculation.push(format!("{:.2}", results.critical_multiplier));
    }
    if kind.has_advantage() {
        formula.push("Advantage Multiplier");
        calculation.push(format!("{:.2}", results.advantage_multiplier));
    }

    formula.push("Hit Count");
    calculation.push(format!("{}", results.hit_count));

    FinalDamageLine {
        kind,
        formula: formula.join(" × "),
        calculation: calculation.join(" × "),
        result: results.final_damages.get(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (DamageResults, TraceInput) {
        let results = DamageResults {
            total_attack: 1500.0,
            enemy_defense: 300.0,
            base_damage: 1200.0,
            skill_power_percent: 1.5,
            critical_multiplier: 1.5 + 15.0 / 100.0,
            advantage_multiplier: 1.25 + 10.0 / 100.0,
            hit_count: 1.0,
            final_damages: FinalDamages {
                normal: 1800,
                critical: 2970,
                advantage_normal: 2430,
                advantage_critical: 4009,
            },
        };
        let input = TraceInput {
            skill_power: 150.0,
            percent_divisor: 100.0,
            critical_base: 1.5,
            advantage_base: 1.25,
            critical_damage_bonus: 15.0,
            advantage_damage_bonus: 10.0,
        };
        (results, input)
    }

    #[test]
    fn test_scalar_steps() {
        let (results, input) = scenario();
        let steps = build_calculation_steps(&results, &input);

        assert_eq!(steps.base_damage.calculation, "1500 - 300");
        assert_eq!(steps.base_damage.result, 1200.0);

        assert_eq!(steps.skill_power.formula, "Skill Power / 100");
        assert_eq!(steps.skill_power.calculation, "150.0 / 100");
        assert_eq!(steps.skill_power.result, 1.5);

        assert_eq!(steps.critical_multiplier.calculation, "1.5 + 0.15");
        assert_eq!(steps.critical_multiplier.result, 1.65);

        assert_eq!(steps.advantage_multiplier.calculation, "1.25 + 0.10");
        assert_eq!(steps.advantage_multiplier.result, 1.35);
    }

    #[test]
    fn test_final_damage_lines() {
        let (results, input) = scenario();
        let steps = build_calculation_steps(&results, &input);
        let step = &steps.final_damage;

        assert_eq!(step.lines.len(), 4);

        let normal = step.line(DamageKind::Normal).unwrap();
        assert_eq!(normal.formula, "Base Damage × Skill Power% × Hit Count");
        assert_eq!(normal.calculation, "1200 × 1.500 × 1");
        assert_eq!(normal.result, 1800);

        let critical = step.line(DamageKind::Critical).unwrap();
        assert_eq!(critical.calculation, "1200 × 1.500 × 1.65 × 1");

        let adv_crit = step.line(DamageKind::AdvantageCritical).unwrap();
        assert_eq!(
            adv_crit.formula,
            "Base Damage × Skill Power% × Critical Multiplier × Advantage Multiplier × Hit Count"
        );
        assert_eq!(adv_crit.calculation, "1200 × 1.500 × 1.65 × 1.35 × 1");
        assert_eq!(adv_crit.result, 4009);

        assert_eq!(
            step.formula,
            "Base Damage × Skill Power% × Critical × Advantage × Hit Count"
        );
    }

    #[test]
    fn test_display_rounding_is_three_places() {
        assert_eq!(display3(1.23456), 1.235);
        assert_eq!(display3(1.5), 1.5);
    }

    #[test]
    fn test_scalar_steps_order() {
        let (results, input) = scenario();
        let steps = build_calculation_steps(&results, &input);
        let labels: Vec<_> = steps.scalar_steps().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Base Damage", "Skill Power (%)", "Critical Multiplier", "Advantage Multiplier"]
        );
    }
}
