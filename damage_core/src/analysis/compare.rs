//! Scenario comparison - how much each alternative gains over a baseline

use crate::damage::{DamageCalculation, FinalDamages};
use crate::types::DamageKind;
use serde::{Deserialize, Serialize};

/// Per-outcome change relative to the baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageDelta {
    pub normal: f64,
    pub critical: f64,
    pub advantage_normal: f64,
    pub advantage_critical: f64,
}

impl DamageDelta {
    pub fn get(&self, kind: DamageKind) -> f64 {
        match kind {
            DamageKind::Normal => self.normal,
            DamageKind::Critical => self.critical,
            DamageKind::AdvantageNormal => self.advantage_normal,
            DamageKind::AdvantageCritical => self.advantage_critical,
        }
    }

    fn from_fn(f: impl Fn(DamageKind) -> f64) -> Self {
        DamageDelta {
            normal: f(DamageKind::Normal),
            critical: f(DamageKind::Critical),
            advantage_normal: f(DamageKind::AdvantageNormal),
            advantage_critical: f(DamageKind::AdvantageCritical),
        }
    }
}

/// One alternative scenario compared with the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub label: String,
    /// Absolute difference (alternative − baseline); may be negative
    pub damage_increase: DamageDelta,
    /// Difference as a percentage of the baseline; 0 when the baseline is 0
    pub percentage_increase: DamageDelta,
}

/// Compare each labelled alternative against `base`
pub fn compare_damage_scenarios(
    base: &DamageCalculation,
    alternatives: &[(String, DamageCalculation)],
) -> Vec<ScenarioComparison> {
    let base_damages = &base.results.final_damages;

    alternatives
        .iter()
        .map(|(label, alt)| compare_one(label, base_damages, &alt.results.final_damages))
        .collect()
}

fn compare_one(label: &str, base: &FinalDamages, alt: &FinalDamages) -> ScenarioComparison {
    let damage_increase = DamageDelta::from_fn(|kind| alt.get(kind) as f64 - base.get(kind) as f64);
    let percentage_increase = DamageDelta::from_fn(|kind| {
        let baseline = base.get(kind) as f64;
        if baseline > 0.0 {
            damage_increase.get(kind) / baseline * 100.0
        } else {
            0.0
        }
    });

    ScenarioComparison {
        label: label.to_string(),
        damage_increase,
        percentage_increase,
    }
}
