//! Roster tab: character list and the selected character's skills

use crate::app::App;
use damage_core::format::format_decimals;
use damage_core::{Character, MAX_SKILL_LEVEL};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_character_list(f, app, chunks[0]);
    draw_character_details(f, app, chunks[1]);
}

fn draw_character_list(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_characters();
    let height = area.height.saturating_sub(2) as usize;
    // keep the cursor on screen
    let offset = app.roster_scroll.saturating_sub(height.saturating_sub(1));

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(row, (index, character))| {
            let highlighted = row == app.roster_scroll;
            let active = app.selected_character == Some(*index);
            let style = if highlighted {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if active {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if highlighted { "► " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:4}", format!("{:?}", character.rarity)),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(format!("{}{}", prefix, character.name), style),
            ]))
        })
        .collect();

    let title = match &app.attribute_filter {
        Some(attr) => format!(" Characters [{}] ({}) ", attr, visible.len()),
        None => format!(" Characters ({}) ", visible.len()),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_character_details(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");

    let visible = app.visible_characters();
    let Some((_, character)) = visible.get(app.roster_scroll) else {
        f.render_widget(Paragraph::new("No characters").block(block), area);
        return;
    };

    let paragraph = Paragraph::new(detail_lines(character))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn detail_lines(character: &Character) -> Vec<Line<'static>> {
    let field = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:12}", name), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            character.name.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Rarity", format!("{:?}", character.rarity)),
        field("School", character.school.clone()),
        field("Team", character.team.clone()),
        field("Attribute", character.attribute.clone()),
        field("Type", character.char_type.clone()),
        field("Role", character.role.clone()),
        field("Proficiency", character.proficiency.join(", ")),
        field("Released", character.implementation_date.clone()),
        Line::from(""),
    ];

    for skill in &character.skills {
        let hits = skill
            .hit_count
            .map(|h| format!("{} hit", h))
            .unwrap_or_else(|| "-".to_string());
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", skill.skill_type.code()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(skill.name.clone(), Style::default().fg(Color::White)),
            Span::styled(format!("  {}", hits), Style::default().fg(Color::DarkGray)),
        ]));

        let known: Vec<String> = skill
            .power_per_level
            .known_levels()
            .map(|(level, power)| format!("Lv{} {}%", level, format_decimals(power, 2)))
            .collect();
        let text = if known.is_empty() {
            format!("  no power data (Lv1-{})", MAX_SKILL_LEVEL)
        } else {
            format!("  {}", known.join("  "))
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))));
    }

    lines
}
