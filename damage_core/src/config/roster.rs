//! Character roster loading

use super::ConfigError;
use crate::skill::{power_at_level, SkillPowerTable};
use crate::types::{Rarity, SkillType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A skill and its per-level power table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub skill_type: SkillType,
    #[serde(default)]
    pub power_per_level: SkillPowerTable,
    /// `None` when the skill has no hit count listed
    #[serde(default)]
    pub hit_count: Option<u32>,
}

impl Skill {
    /// Power at `level`, 0 when the table has no data there
    pub fn power_at_level(&self, level: u32) -> f64 {
        power_at_level(&self.power_per_level, level)
    }
}

/// A playable character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub team: String,
    pub attribute: String,
    #[serde(rename = "type", default)]
    pub char_type: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub proficiency: Vec<String>,
    #[serde(default)]
    pub implementation_date: String,
    #[serde(default)]
    pub detail_link: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Character {
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }
}

/// All characters known to the calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    pub fn new(characters: Vec<Character>) -> Self {
        Roster { characters }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Find a character by exact name
    pub fn find(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Characters with the given attribute
    pub fn by_attribute<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = &'a Character> + 'a {
        self.characters.iter().filter(move |c| c.attribute == attribute)
    }

    /// Distinct attributes in roster order
    pub fn attributes(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for character in &self.characters {
            if !seen.contains(&character.attribute.as_str()) {
                seen.push(character.attribute.as_str());
            }
        }
        seen
    }
}

/// Load a roster from a JSON file
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let content = fs::read_to_string(path)?;
    let roster = parse_roster(&content)?;
    tracing::debug!(path = %path.display(), characters = roster.len(), "loaded roster");
    Ok(roster)
}

/// Load a roster from a JSON string
pub fn parse_roster(content: &str) -> Result<Roster, ConfigError> {
    let roster: Roster = serde_json::from_str(content)?;

    for character in &roster.characters {
        if character.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "character with empty name".to_string(),
            ));
        }
    }

    Ok(roster)
}

/// Get the bundled roster
pub fn default_roster() -> Roster {
    let json = include_str!("../../config/roster.json");
    parse_roster(json).unwrap_or_default()
}
