//! Analysis helpers built on top of the engine

mod chart;
mod compare;
mod optimal;

pub use chart::{bar_chart_data, BarChartEntry};
pub use compare::{compare_damage_scenarios, DamageDelta, ScenarioComparison};
pub use optimal::{find_optimal_skill_level, LevelDamage, OptimalLevel};
