//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AdvancedSettings, BattleSettings, DamageKind, RoundingMode};

// Engine
pub use crate::damage::{calculate_damage, DamageCalculation, DamageEngine, DamageResults, FinalDamages};
pub use crate::error::{CalculationError, InputField};

// Lookup and resolution
pub use crate::resolve::{resolve_hit_count, resolve_skill_power, resolve_total_attack};
pub use crate::skill::{power_at_level, SkillPowerTable};

// Config
pub use crate::config::{default_constants, default_roster, Character, GameConstants, Roster, Skill};
