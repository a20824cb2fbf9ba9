//! DamageResults - Outcome of one damage calculation

use super::CalculationSteps;
use crate::types::DamageKind;
use serde::{Deserialize, Serialize};

/// The four rounded damage totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinalDamages {
    pub normal: u64,
    pub critical: u64,
    pub advantage_normal: u64,
    pub advantage_critical: u64,
}

impl FinalDamages {
    /// Damage for one outcome
    pub fn get(&self, kind: DamageKind) -> u64 {
        match kind {
            DamageKind::Normal => self.normal,
            DamageKind::Critical => self.critical,
            DamageKind::AdvantageNormal => self.advantage_normal,
            DamageKind::AdvantageCritical => self.advantage_critical,
        }
    }

    /// `(kind, damage)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (DamageKind, u64)> + '_ {
        DamageKind::all().iter().map(move |&kind| (kind, self.get(kind)))
    }

    /// The largest of the four totals
    pub fn max(&self) -> u64 {
        self.iter().map(|(_, d)| d).max().unwrap_or(0)
    }
}

/// Snapshot of every quantity the calculation produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResults {
    pub total_attack: f64,
    pub enemy_defense: f64,
    /// `max(0, total_attack - enemy_defense)`
    pub base_damage: f64,
    /// Skill power as a fraction (150 power = 1.5)
    pub skill_power_percent: f64,
    pub critical_multiplier: f64,
    pub advantage_multiplier: f64,
    pub hit_count: f64,
    pub final_damages: FinalDamages,
}

impl DamageResults {
    /// Damage for one outcome
    pub fn damage(&self, kind: DamageKind) -> u64 {
        self.final_damages.get(kind)
    }

    /// Whether the defense absorbed the whole attack
    pub fn is_fully_blocked(&self) -> bool {
        self.base_damage <= 0.0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .final_damages
            .iter()
            .map(|(kind, damage)| format!("{}: {}", kind.label(), damage))
            .collect();
        parts.join(", ")
    }
}

/// Results plus the trace that explains them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageCalculation {
    pub results: DamageResults,
    pub steps: CalculationSteps,
}
