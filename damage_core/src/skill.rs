//! Skill power tables and per-level lookup

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of skill levels a power table covers
pub const MAX_SKILL_LEVEL: u32 = 15;

/// Per-level skill power, level 1 at index 0
///
/// Levels without published data are `None` and resolve to 0 power.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<f64>>", into = "Vec<Option<f64>>")]
pub struct SkillPowerTable {
    levels: [Option<f64>; MAX_SKILL_LEVEL as usize],
}

/// A power table with more entries than there are skill levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTooLong(pub usize);

impl fmt::Display for TableTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skill power table has {} entries, at most {} allowed",
            self.0, MAX_SKILL_LEVEL
        )
    }
}

impl SkillPowerTable {
    /// Create an empty table (no data at any level)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(level, power)` pairs. Levels outside 1..=15 are ignored.
    pub fn from_levels(entries: &[(u32, f64)]) -> Self {
        let mut table = Self::new();
        for &(level, power) in entries {
            table.set(level, Some(power));
        }
        table
    }

    /// Stored power at `level`, `None` when absent or out of range
    pub fn get(&self, level: u32) -> Option<f64> {
        if !(1..=MAX_SKILL_LEVEL).contains(&level) {
            return None;
        }
        self.levels[(level - 1) as usize]
    }

    /// Set or clear the power at `level`. Out-of-range levels are ignored.
    pub fn set(&mut self, level: u32, power: Option<f64>) {
        if (1..=MAX_SKILL_LEVEL).contains(&level) {
            self.levels[(level - 1) as usize] = power;
        }
    }

    /// Levels that carry data, with their power
    pub fn known_levels(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.levels
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|power| (i as u32 + 1, power)))
    }

    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(Option::is_none)
    }
}

impl TryFrom<Vec<Option<f64>>> for SkillPowerTable {
    type Error = TableTooLong;

    fn try_from(values: Vec<Option<f64>>) -> Result<Self, Self::Error> {
        if values.len() > MAX_SKILL_LEVEL as usize {
            return Err(TableTooLong(values.len()));
        }
        let mut table = SkillPowerTable::new();
        for (i, power) in values.into_iter().enumerate() {
            table.levels[i] = power;
        }
        Ok(table)
    }
}

impl From<SkillPowerTable> for Vec<Option<f64>> {
    fn from(table: SkillPowerTable) -> Self {
        table.levels.to_vec()
    }
}

/// Skill power at `level`
///
/// Returns 0 for levels outside 1..=15 and for levels without data;
/// otherwise the stored value unchanged.
pub fn power_at_level(table: &SkillPowerTable, level: u32) -> f64 {
    table.get(level).unwrap_or(0.0)
}
