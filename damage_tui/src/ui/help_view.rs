//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let constants = app.constants();
    let crit = constants.multipliers.critical_base;
    let adv = constants.multipliers.advantage_base;

    let lines = vec![
        section("═══ Navigation ═══"),
        key_line("1-4", "Jump to tab (Calc/Steps/Roster/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section("═══ Calculator ═══"),
        key_line("←/→", "Adjust value, cycle character/skill/rounding"),
        key_line("Enter", "Type a value (Enter applies, Esc cancels)"),
        key_line("x", "Drop manual attack/power/hits override"),
        key_line("r", "Reset everything"),
        Line::from(""),
        section("═══ Roster ═══"),
        key_line("Enter", "Use highlighted character"),
        key_line("f", "Cycle attribute filter"),
        Line::from(""),
        section("═══ Formula ═══"),
        Line::from("  Base      = max(0, Attack - Defense)"),
        Line::from("  Power     = Skill Power / 100"),
        Line::from(format!("  Critical  = {} + Critical Bonus / 100", crit)),
        Line::from(format!("  Advantage = {} + Advantage Bonus / 100", adv)),
        Line::from("  Damage    = Base × Power × [Critical] × [Advantage] × Hits"),
        Line::from(""),
        Line::from(Span::styled(
            "Each of the four results is rounded on its own.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Manual entries win over roster values; skill levels clamp to 1-15.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
