//! Application state

use crate::config::TuiConfig;
use damage_core::config::GameConstants;
use damage_core::resolve::{
    clamp_skill_level, resolve_hit_count, resolve_skill_power, resolve_total_attack,
};
use damage_core::{
    compare_damage_scenarios, find_optimal_skill_level, parse_number, AdvancedSettings,
    BattleSettings, CalculationError, Character, DamageCalculation, DamageEngine, InputField,
    OptimalLevel, Roster, ScenarioComparison, Skill,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Steps,
    Roster,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Steps, Tab::Roster, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "Calc",
            Tab::Steps => "Steps",
            Tab::Roster => "Roster",
            Tab::Help => "Help",
        }
    }
}

/// Editable rows on the calculator tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Character,
    Skill,
    SkillLevel,
    AttackPower,
    SkillPower,
    HitCount,
    EnemyDefense,
    CriticalBonus,
    AdvantageBonus,
    Rounding,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Character,
            Field::Skill,
            Field::SkillLevel,
            Field::AttackPower,
            Field::SkillPower,
            Field::HitCount,
            Field::EnemyDefense,
            Field::CriticalBonus,
            Field::AdvantageBonus,
            Field::Rounding,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Character => "Character",
            Field::Skill => "Skill",
            Field::SkillLevel => "Skill Level",
            Field::AttackPower => "Attack Power",
            Field::SkillPower => "Skill Power",
            Field::HitCount => "Hit Count",
            Field::EnemyDefense => "Enemy Defense",
            Field::CriticalBonus => "Critical Bonus %",
            Field::AdvantageBonus => "Advantage Bonus %",
            Field::Rounding => "Rounding",
        }
    }

    /// Whether the field takes typed numbers
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Field::AttackPower
                | Field::SkillPower
                | Field::HitCount
                | Field::EnemyDefense
                | Field::CriticalBonus
                | Field::AdvantageBonus
        )
    }

    /// Left/Right step size for numeric fields
    fn step(&self) -> f64 {
        match self {
            Field::AttackPower => 100.0,
            Field::SkillPower => 10.0,
            Field::HitCount => 1.0,
            Field::EnemyDefense => 10.0,
            Field::CriticalBonus | Field::AdvantageBonus => 1.0,
            _ => 0.0,
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub roster: Roster,
    pub engine: DamageEngine,
    pub selected_character: Option<usize>,
    pub selected_skill: Option<usize>,
    pub skill_level: u32,
    pub base_attack: f64,
    pub manual_attack: Option<f64>,
    pub manual_skill_power: Option<f64>,
    pub manual_hit_count: Option<f64>,
    pub battle: BattleSettings,
    pub advanced: AdvancedSettings,
    /// Last successful calculation; kept when a later one fails
    pub calculation: Option<DamageCalculation>,
    /// Results the current ones replaced
    pub previous_calculation: Option<DamageCalculation>,
    pub last_error: Option<CalculationError>,
    pub status: Option<String>,
    pub selected_field: usize,
    /// Text being typed into the selected numeric field
    pub edit_buffer: Option<String>,
    pub attribute_filter: Option<String>,
    pub roster_scroll: usize,
    pub steps_scroll: usize,
    pub show_help: bool,
    defaults: (BattleSettings, AdvancedSettings),
}

impl App {
    pub fn new(config: &TuiConfig, constants: GameConstants, roster: Roster) -> Self {
        let base_attack = config
            .base_attack
            .unwrap_or(constants.attack_power.default);
        let skill_level = constants.skill_level.min;

        let mut app = App {
            current_tab: Tab::Calculator,
            roster,
            engine: DamageEngine::new(constants),
            selected_character: None,
            selected_skill: None,
            skill_level,
            base_attack,
            manual_attack: None,
            manual_skill_power: None,
            manual_hit_count: None,
            battle: config.battle,
            advanced: config.advanced,
            calculation: None,
            previous_calculation: None,
            last_error: None,
            status: None,
            selected_field: 0,
            edit_buffer: None,
            attribute_filter: None,
            roster_scroll: 0,
            steps_scroll: 0,
            show_help: false,
            defaults: (config.battle, config.advanced),
        };
        app.recalculate();
        app
    }

    pub fn constants(&self) -> &GameConstants {
        self.engine.constants()
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = if idx == 0 {
            tabs[tabs.len() - 1]
        } else {
            tabs[idx - 1]
        };
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.current_tab = if self.show_help {
            Tab::Help
        } else {
            Tab::Calculator
        };
    }

    // === Selection ===

    /// Characters visible under the current attribute filter, with roster indices
    pub fn visible_characters(&self) -> Vec<(usize, &Character)> {
        self.roster
            .characters()
            .iter()
            .enumerate()
            .filter(|(_, c)| match &self.attribute_filter {
                Some(attr) => &c.attribute == attr,
                None => true,
            })
            .collect()
    }

    pub fn current_character(&self) -> Option<&Character> {
        self.selected_character
            .and_then(|i| self.roster.characters().get(i))
    }

    pub fn current_skill(&self) -> Option<&Skill> {
        let character = self.current_character()?;
        self.selected_skill.and_then(|i| character.skills.get(i))
    }

    pub fn current_field(&self) -> Field {
        let fields = Field::all();
        fields[self.selected_field.min(fields.len() - 1)]
    }

    /// Select a character by roster index; skill and level reset
    pub fn set_character(&mut self, index: Option<usize>) {
        self.selected_character = index.filter(|i| *i < self.roster.len());
        self.selected_skill = None;
        self.skill_level = self.engine.constants().skill_level.min;
        self.manual_skill_power = None;
        self.manual_hit_count = None;
        self.recalculate();
    }

    /// Select a skill of the current character; its power and hit count take over
    pub fn set_skill(&mut self, index: Option<usize>) {
        let count = self.current_character().map_or(0, |c| c.skills.len());
        self.selected_skill = index.filter(|i| *i < count);
        self.manual_skill_power = None;
        self.manual_hit_count = None;
        self.recalculate();
    }

    pub fn set_skill_level(&mut self, level: i64) {
        self.skill_level = clamp_skill_level(level, &self.engine.constants().skill_level);
        // a new level re-derives power from the table
        self.manual_skill_power = None;
        self.recalculate();
    }

    /// Cycle the attribute filter through every attribute, then back to all
    pub fn cycle_attribute_filter(&mut self) {
        let attributes = self.roster.attributes();
        self.attribute_filter = match &self.attribute_filter {
            None => attributes.first().map(|a| a.to_string()),
            Some(current) => {
                let pos = attributes.iter().position(|a| a == current);
                pos.and_then(|p| attributes.get(p + 1)).map(|a| a.to_string())
            }
        };
        self.roster_scroll = 0;
    }

    fn cycle_character(&mut self, forward: bool) {
        let visible: Vec<usize> = self.visible_characters().iter().map(|(i, _)| *i).collect();
        if visible.is_empty() {
            self.set_character(None);
            return;
        }
        let pos = self
            .selected_character
            .and_then(|sel| visible.iter().position(|i| *i == sel));
        let next = match (pos, forward) {
            (None, true) => Some(visible[0]),
            (None, false) => visible.last().copied(),
            (Some(p), true) if p + 1 < visible.len() => Some(visible[p + 1]),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(p), false) => Some(visible[p - 1]),
        };
        self.set_character(next);
    }

    fn cycle_skill(&mut self, forward: bool) {
        let count = self.current_character().map_or(0, |c| c.skills.len());
        if count == 0 {
            return;
        }
        let next = match (self.selected_skill, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        self.set_skill(next);
    }

    // === Input ===

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                if self.edit_buffer.is_none() && self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            Tab::Steps => self.steps_scroll = self.steps_scroll.saturating_sub(1),
            Tab::Roster => self.roster_scroll = self.roster_scroll.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                if self.edit_buffer.is_none() && self.selected_field + 1 < Field::all().len() {
                    self.selected_field += 1;
                }
            }
            Tab::Steps => self.steps_scroll += 1,
            Tab::Roster => {
                if self.roster_scroll + 1 < self.visible_characters().len() {
                    self.roster_scroll += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        self.adjust(false);
    }

    pub fn on_right(&mut self) {
        self.adjust(true);
    }

    /// Step the selected field up or down
    fn adjust(&mut self, up: bool) {
        if self.current_tab != Tab::Calculator || self.edit_buffer.is_some() {
            return;
        }
        let field = self.current_field();
        let sign = if up { 1.0 } else { -1.0 };

        match field {
            Field::Character => self.cycle_character(up),
            Field::Skill => self.cycle_skill(up),
            Field::SkillLevel => self.set_skill_level(self.skill_level as i64 + if up { 1 } else { -1 }),
            Field::Rounding => {
                self.advanced.rounding_mode = if up {
                    self.advanced.rounding_mode.next()
                } else {
                    self.advanced.rounding_mode.next().next()
                };
                self.recalculate();
            }
            _ => {
                let current = self.field_value(field).unwrap_or(0.0);
                self.commit_value(field, Some(current + sign * field.step()));
            }
        }
    }

    /// Enter starts editing a numeric field, or commits the edit in progress
    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                if self.edit_buffer.is_some() {
                    self.commit_edit();
                } else if self.current_field().is_numeric() {
                    self.edit_buffer = Some(String::new());
                    self.status = Some(format!("Editing {} (Enter to apply, Esc to cancel)", self.current_field().name()));
                }
            }
            Tab::Roster => {
                let index = self
                    .visible_characters()
                    .get(self.roster_scroll)
                    .map(|(i, _)| *i);
                if let Some(index) = index {
                    self.set_character(Some(index));
                    self.current_tab = Tab::Calculator;
                }
            }
            _ => {}
        }
    }

    pub fn on_char(&mut self, c: char) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            if c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E') {
                buffer.push(c);
            }
        }
    }

    pub fn on_backspace(&mut self) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
        }
    }

    pub fn on_escape(&mut self) {
        if self.edit_buffer.take().is_some() {
            self.status = Some("Edit cancelled".to_string());
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    /// Drop the manual override on the selected field
    pub fn clear_override(&mut self) {
        match self.current_field() {
            Field::AttackPower => self.manual_attack = None,
            Field::SkillPower => self.manual_skill_power = None,
            Field::HitCount => self.manual_hit_count = None,
            _ => return,
        }
        self.status = Some(format!("{} reset to derived value", self.current_field().name()));
        self.recalculate();
    }

    fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        let field = self.current_field();

        if buffer.trim().is_empty() {
            self.commit_value(field, None);
            return;
        }

        match parse_field(field, &buffer) {
            Ok(value) => self.commit_value(field, Some(value)),
            Err(message) => {
                tracing::warn!(field = field.name(), input = %buffer, "rejected input");
                self.status = Some(message);
            }
        }
    }

    /// Store a value for a numeric field and recalculate
    ///
    /// `None` clears manual overrides (battle settings go to 0).
    pub fn commit_value(&mut self, field: Field, value: Option<f64>) {
        let constants = self.engine.constants().clone();
        match field {
            Field::AttackPower => self.manual_attack = value,
            Field::SkillPower => self.manual_skill_power = value,
            Field::HitCount => self.manual_hit_count = value,
            Field::EnemyDefense => {
                self.battle.enemy_defense = constants.defense.clamp(value.unwrap_or(0.0));
            }
            Field::CriticalBonus => {
                self.battle.critical_damage_bonus =
                    value.unwrap_or(0.0).clamp(0.0, constants.bonus.critical_max);
            }
            Field::AdvantageBonus => {
                self.battle.advantage_damage_bonus =
                    value.unwrap_or(0.0).clamp(0.0, constants.bonus.advantage_max);
            }
            _ => return,
        }
        self.status = None;
        self.recalculate();
    }

    /// The value currently in effect for a numeric field
    pub fn field_value(&self, field: Field) -> Option<f64> {
        let skill = self.current_skill();
        match field {
            Field::AttackPower => Some(resolve_total_attack(self.manual_attack, self.base_attack)),
            Field::SkillPower => resolve_skill_power(self.manual_skill_power, skill, self.skill_level)
                .or(Some(self.constants().skill_power.default)),
            Field::HitCount => Some(resolve_hit_count(
                self.manual_hit_count,
                skill,
                self.constants().hit_count.default,
            )),
            Field::EnemyDefense => Some(self.battle.enemy_defense),
            Field::CriticalBonus => Some(self.battle.critical_damage_bonus),
            Field::AdvantageBonus => Some(self.battle.advantage_damage_bonus),
            _ => None,
        }
    }

    /// Whether the selected skill's table has no entry at the current level
    ///
    /// Manual power overrides the table, so it never counts as missing.
    pub fn skill_power_missing(&self) -> bool {
        if self.manual_skill_power.is_some() {
            return false;
        }
        self.current_skill()
            .is_some_and(|s| s.power_per_level.get(self.skill_level).is_none())
    }

    /// Whether the field's value was typed in rather than derived
    pub fn is_manual(&self, field: Field) -> bool {
        match field {
            Field::AttackPower => self.manual_attack.is_some(),
            Field::SkillPower => self.manual_skill_power.is_some(),
            Field::HitCount => self.manual_hit_count.is_some(),
            _ => false,
        }
    }

    // === Calculation ===

    /// Run the engine on the current state
    ///
    /// On a validation error the previous results stay in place.
    pub fn recalculate(&mut self) {
        let skill = self.current_skill();
        let total_attack = resolve_total_attack(self.manual_attack, self.base_attack);
        let skill_power = resolve_skill_power(self.manual_skill_power, skill, self.skill_level);
        let hit_count =
            resolve_hit_count(self.manual_hit_count, skill, self.constants().hit_count.default);

        match self.engine.compute(
            total_attack,
            &self.battle,
            skill_power,
            hit_count,
            self.advanced.rounding_mode,
        ) {
            Ok(calculation) => {
                if self.calculation.as_ref() != Some(&calculation) {
                    self.previous_calculation = self.calculation.replace(calculation);
                }
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "calculation rejected, keeping previous results");
                self.status = Some(err.to_string());
                self.last_error = Some(err);
            }
        }
    }

    /// How the current results differ from the ones they replaced
    pub fn change_from_previous(&self) -> Option<ScenarioComparison> {
        let previous = self.previous_calculation.as_ref()?;
        let current = self.calculation.clone()?;
        compare_damage_scenarios(previous, &[("current".to_string(), current)])
            .into_iter()
            .next()
    }

    /// Best level for the selected skill at the current attack and settings
    pub fn optimal_level(&self) -> Option<OptimalLevel> {
        let skill = self.current_skill()?;
        let total_attack = resolve_total_attack(self.manual_attack, self.base_attack);
        find_optimal_skill_level(
            &self.engine,
            skill,
            total_attack,
            &self.battle,
            self.advanced.rounding_mode,
        )
        .ok()
    }

    /// Back to the configured starting state
    pub fn reset(&mut self) {
        let (battle, advanced) = self.defaults;
        self.selected_character = None;
        self.selected_skill = None;
        self.skill_level = self.engine.constants().skill_level.min;
        self.manual_attack = None;
        self.manual_skill_power = None;
        self.manual_hit_count = None;
        self.battle = battle;
        self.advanced = advanced;
        self.edit_buffer = None;
        self.attribute_filter = None;
        self.calculation = None;
        self.previous_calculation = None;
        self.last_error = None;
        self.status = Some("Reset.".to_string());
        self.recalculate();
    }
}

/// Parse typed text for a field
fn parse_field(field: Field, text: &str) -> Result<f64, String> {
    let input_field = match field {
        Field::AttackPower => Some(InputField::TotalAttack),
        Field::SkillPower => Some(InputField::SkillPower),
        Field::HitCount => Some(InputField::HitCount),
        _ => None,
    };

    match input_field {
        Some(input_field) => parse_number(input_field, text).map_err(|e| e.to_string()),
        None => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid input for {}: {}", field.name(), text.trim())),
    }
}

impl Default for App {
    fn default() -> Self {
        let config = TuiConfig::default();
        App::new(&config, damage_core::default_constants(), damage_core::default_roster())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use damage_core::RoundingMode;

    const MEL: &str = "【シリウスシュガーのエース】桃園める";

    fn select_field(app: &mut App, field: Field) {
        app.selected_field = Field::all().iter().position(|f| *f == field).unwrap();
    }

    fn type_value(app: &mut App, field: Field, text: &str) {
        select_field(app, field);
        app.on_enter();
        for c in text.chars() {
            app.on_char(c);
        }
        app.on_enter();
    }

    fn mel_index(app: &App) -> usize {
        app.roster
            .characters()
            .iter()
            .position(|c| c.name == MEL)
            .unwrap()
    }

    #[test]
    fn test_initial_calculation() {
        let app = App::default();
        let calc = app.calculation.as_ref().expect("initial results");
        // 1000 attack, default 100 power, one hit
        assert_eq!(calc.results.final_damages.normal, 1000);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_scenario_through_inputs() {
        let mut app = App::default();
        type_value(&mut app, Field::AttackPower, "1500");
        type_value(&mut app, Field::SkillPower, "150");
        type_value(&mut app, Field::EnemyDefense, "300");
        type_value(&mut app, Field::CriticalBonus, "15");
        type_value(&mut app, Field::AdvantageBonus, "10");

        let d = app.calculation.as_ref().unwrap().results.final_damages;
        assert_eq!(
            (d.normal, d.critical, d.advantage_normal, d.advantage_critical),
            (1800, 2970, 2430, 4009)
        );
    }

    #[test]
    fn test_invalid_input_keeps_previous_results() {
        let mut app = App::default();
        type_value(&mut app, Field::AttackPower, "1500");
        let before = app.calculation.clone();

        type_value(&mut app, Field::HitCount, "0");

        assert_eq!(app.calculation, before);
        let err = app.last_error.as_ref().expect("error recorded");
        assert_eq!(err.field(), InputField::HitCount);
        assert!(app.status.as_ref().unwrap().contains("hitCount"));

        // fixing the input clears the error
        type_value(&mut app, Field::HitCount, "2");
        assert!(app.last_error.is_none());
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 3000);
    }

    #[test]
    fn test_unparseable_text_changes_nothing() {
        let mut app = App::default();
        let before = app.calculation.clone();
        type_value(&mut app, Field::AttackPower, "1e");

        assert_eq!(app.calculation, before);
        assert!(app.manual_attack.is_none());
        assert!(app.status.as_ref().unwrap().contains("totalAttack"));
    }

    #[test]
    fn test_skill_selection_drives_power_and_hits() {
        let mut app = App::default();
        app.set_character(Some(mel_index(&app)));
        // ペンタブレイド
        app.set_skill(Some(1));
        app.set_skill_level(10);

        assert_eq!(app.field_value(Field::SkillPower), Some(28.08));
        assert_eq!(app.field_value(Field::HitCount), Some(5.0));
        assert!(!app.is_manual(Field::SkillPower));

        // 1000 * 0.2808 * 5
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 1404);
    }

    #[test]
    fn test_level_without_power_data() {
        let mut app = App::default();
        app.set_character(Some(mel_index(&app)));
        // ペンタブレイド has entries at levels 1 and 10 only
        app.set_skill(Some(1));
        assert!(!app.skill_power_missing());

        app.set_skill_level(2);
        assert!(app.skill_power_missing());
        assert_eq!(app.field_value(Field::SkillPower), Some(0.0));
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 0);

        let optimal = app.optimal_level().unwrap();
        assert!(!optimal.damage_at_each_level[1].has_power_data);
        assert!(optimal.damage_at_each_level[9].has_power_data);

        type_value(&mut app, Field::SkillPower, "30");
        assert!(!app.skill_power_missing());
    }

    #[test]
    fn test_configured_level_range_and_hits() {
        let constants = GameConstants::parse(
            "[skill_level]\nmin = 1\nmax = 10\n\n[hit_count]\ndefault = 2",
        )
        .unwrap();
        let mut app = App::new(&TuiConfig::default(), constants, damage_core::default_roster());

        app.set_skill_level(15);
        assert_eq!(app.skill_level, 10);
        // no skill selected: configured default hits
        assert_eq!(app.field_value(Field::HitCount), Some(2.0));
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 2000);
    }

    #[test]
    fn test_manual_power_overrides_then_clears() {
        let mut app = App::default();
        app.set_character(Some(mel_index(&app)));
        app.set_skill(Some(0));

        type_value(&mut app, Field::SkillPower, "200");
        assert!(app.is_manual(Field::SkillPower));
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 2000);

        app.clear_override();
        assert_eq!(app.field_value(Field::SkillPower), Some(75.0));
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 750);
    }

    #[test]
    fn test_change_from_previous() {
        let mut app = App::default();
        assert!(app.change_from_previous().is_none());

        type_value(&mut app, Field::AttackPower, "1200");
        let change = app.change_from_previous().unwrap();
        assert_eq!(change.damage_increase.normal, 200.0);
        assert!((change.percentage_increase.normal - 20.0).abs() < 1e-9);

        // a rejected input leaves the comparison alone
        type_value(&mut app, Field::HitCount, "0");
        assert_eq!(app.change_from_previous().unwrap().damage_increase.normal, 200.0);
    }

    #[test]
    fn test_level_clamped() {
        let mut app = App::default();
        app.set_skill_level(40);
        assert_eq!(app.skill_level, 15);
        select_field(&mut app, Field::SkillLevel);
        app.on_right();
        assert_eq!(app.skill_level, 15);
        app.set_skill_level(-2);
        assert_eq!(app.skill_level, 1);
    }

    #[test]
    fn test_rounding_cycles() {
        let mut app = App::default();
        select_field(&mut app, Field::Rounding);
        app.on_right();
        assert_eq!(app.advanced.rounding_mode, RoundingMode::Ceil);
        app.on_left();
        assert_eq!(app.advanced.rounding_mode, RoundingMode::Floor);
        app.on_left();
        assert_eq!(app.advanced.rounding_mode, RoundingMode::Round);
    }

    #[test]
    fn test_battle_settings_clamped() {
        let mut app = App::default();
        type_value(&mut app, Field::CriticalBonus, "5000");
        assert_eq!(app.battle.critical_damage_bonus, 1000.0);
        type_value(&mut app, Field::EnemyDefense, "-50");
        assert_eq!(app.battle.enemy_defense, 0.0);
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = App::default();
        select_field(&mut app, Field::AttackPower);
        app.on_enter();
        app.on_char('9');
        app.on_escape();
        assert!(!app.is_editing());
        assert!(app.manual_attack.is_none());
    }

    #[test]
    fn test_attribute_filter_cycles_back_to_all() {
        let mut app = App::default();
        let count = app.roster.attributes().len();
        for _ in 0..count {
            app.cycle_attribute_filter();
            assert!(app.attribute_filter.is_some());
            assert!(app.visible_characters().len() < app.roster.len());
        }
        app.cycle_attribute_filter();
        assert!(app.attribute_filter.is_none());
        assert_eq!(app.visible_characters().len(), app.roster.len());
    }

    #[test]
    fn test_roster_enter_selects_character() {
        let mut app = App::default();
        app.set_tab(2);
        app.roster_scroll = mel_index(&app);
        app.on_enter();
        assert_eq!(app.current_tab, Tab::Calculator);
        assert_eq!(app.current_character().unwrap().name, MEL);
    }

    #[test]
    fn test_optimal_level() {
        let mut app = App::default();
        app.set_character(Some(mel_index(&app)));
        assert!(app.optimal_level().is_none());
        app.set_skill(Some(0));
        let optimal = app.optimal_level().unwrap();
        assert_eq!(optimal.optimal_level, 10);
    }

    #[test]
    fn test_reset() {
        let mut app = App::default();
        app.set_character(Some(0));
        type_value(&mut app, Field::AttackPower, "5000");
        app.reset();
        assert!(app.current_character().is_none());
        assert!(app.manual_attack.is_none());
        assert_eq!(app.calculation.as_ref().unwrap().results.final_damages.normal, 1000);
    }
}
