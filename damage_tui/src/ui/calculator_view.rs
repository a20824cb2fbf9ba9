//! Calculator tab: inputs on the left, results on the right

use super::{damage_bar, value_line};
use crate::app::{App, Field};
use damage_core::format::{format_damage, format_decimals, format_input};
use damage_core::{bar_chart_data, DamageResults};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_inputs(f, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Results
            Constraint::Min(0),     // Optimal level
        ])
        .split(chunks[1]);

    draw_results(f, app, right[0]);
    draw_optimal(f, app, right[1]);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Field::all()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.selected_field;
            let prefix = if selected { "▶ " } else { "  " };

            let (value, color) = if selected && app.is_editing() {
                let buffer = app.edit_buffer.as_deref().unwrap_or("");
                (format!("{}_", buffer), Color::Yellow)
            } else {
                field_text(app, *field)
            };

            let label_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let mut spans = vec![
                Span::styled(prefix, label_style),
                Span::styled(format!("{:20}", field.name()), label_style),
                Span::styled(value, Style::default().fg(color)),
            ];
            if app.is_manual(*field) {
                spans.push(Span::styled(" (manual)", Style::default().fg(Color::Magenta)));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Inputs "));
    f.render_widget(list, area);
}

fn field_text(app: &App, field: Field) -> (String, Color) {
    match field {
        Field::Character => match app.current_character() {
            Some(c) => (c.name.clone(), Color::White),
            None => ("(none)".to_string(), Color::DarkGray),
        },
        Field::Skill => match app.current_skill() {
            Some(s) => (format!("[{}] {}", s.skill_type.code(), s.name), Color::White),
            None => ("(none)".to_string(), Color::DarkGray),
        },
        Field::SkillLevel => (format!("Lv {}", app.skill_level), Color::White),
        Field::Rounding => (app.advanced.rounding_mode.name().to_string(), Color::White),
        Field::SkillPower if app.skill_power_missing() => {
            (format!("— (no data at Lv {})", app.skill_level), Color::DarkGray)
        }
        Field::SkillPower => {
            let value = app.field_value(field).unwrap_or(0.0);
            (format!("{}%", format_decimals(value, 2)), Color::White)
        }
        Field::HitCount => {
            let value = app.field_value(field).unwrap_or(1.0);
            (format!("{}", value), Color::White)
        }
        _ => {
            let value = app.field_value(field).unwrap_or(0.0);
            (format_input(value), Color::White)
        }
    }
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(calc) = &app.calculation else {
        let paragraph = Paragraph::new("No results yet")
            .block(Block::default().borders(Borders::ALL).title(" Damage "));
        f.render_widget(paragraph, area);
        return;
    };

    let results = &calc.results;
    let mut lines = summary_lines(results);
    lines.push(Line::from(""));

    let bars = bar_chart_data(results);
    let max = results.final_damages.max();
    let bar_width = area.width.saturating_sub(40) as usize;

    for bar in bars.iter() {
        let (r, g, b) = bar.rgb();
        let color = Color::Rgb(r, g, b);
        lines.push(Line::from(vec![
            Span::styled(format!("{:14}", bar.kind.label()), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>12} ", format_damage(bar.damage)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(damage_bar(bar.damage, max, bar_width), Style::default().fg(color)),
        ]));
    }

    if results.is_fully_blocked() {
        lines.push(Line::from(Span::styled(
            "Defense blocks all damage",
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Damage "));
    f.render_widget(paragraph, area);
}

fn summary_lines(results: &DamageResults) -> Vec<Line<'static>> {
    vec![
        value_line("Base Damage", format_input(results.base_damage), Color::White),
        value_line(
            "Skill Power",
            format!("×{}", format_decimals(results.skill_power_percent, 3)),
            Color::White,
        ),
        value_line(
            "Critical ×",
            format_decimals(results.critical_multiplier, 2),
            Color::Yellow,
        ),
        value_line(
            "Advantage ×",
            format_decimals(results.advantage_multiplier, 2),
            Color::Cyan,
        ),
    ]
}

fn draw_optimal(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Skill Level (Adv+Crit) ");

    let Some(optimal) = app.optimal_level() else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Select a skill to compare levels",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let width = area.width.saturating_sub(22) as usize;
    let items: Vec<ListItem> = optimal
        .damage_at_each_level
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let is_best = entry.level == optimal.optimal_level;
            let is_current = entry.level == app.skill_level;
            let color = if is_best { Color::Green } else { Color::Blue };
            let marker = match (is_best, is_current) {
                (true, _) => "★",
                (false, true) => "▶",
                _ => " ",
            };
            let level_span = Span::styled(
                format!("{} Lv{:<3}", marker, entry.level),
                Style::default().fg(Color::Gray),
            );
            if !entry.has_power_data {
                return ListItem::new(Line::from(vec![
                    level_span,
                    Span::styled(format!("{:>10} ", "—"), Style::default().fg(Color::DarkGray)),
                ]));
            }
            ListItem::new(Line::from(vec![
                level_span,
                Span::styled(
                    format!("{:>10} ", format_damage(entry.damage)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    damage_bar(entry.damage, optimal.max_damage, width),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
