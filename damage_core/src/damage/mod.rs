//! Damage system - engine, results and calculation trace

mod calculation;
mod result;
mod steps;

pub use calculation::{calculate_damage, DamageEngine};
pub use result::{DamageCalculation, DamageResults, FinalDamages};
pub use steps::{CalculationStep, CalculationSteps, FinalDamageLine, FinalDamageStep};
