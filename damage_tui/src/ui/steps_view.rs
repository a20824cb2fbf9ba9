//! Step-by-step calculation trace

use crate::app::App;
use damage_core::format::{format_decimals, format_percentage};
use damage_core::{CalculationStep, DamageKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Calculation Steps ");

    let Some(calc) = &app.calculation else {
        f.render_widget(Paragraph::new("No results yet").block(block), area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    for (i, step) in calc.steps.scalar_steps().iter().enumerate() {
        lines.extend(step_lines(i + 1, step));
        lines.push(Line::from(""));
    }

    let final_step = &calc.steps.final_damage;
    lines.push(header(5, &final_step.label));
    lines.push(Line::from(vec![
        Span::styled("  Formula: ", Style::default().fg(Color::DarkGray)),
        Span::raw(final_step.formula.clone()),
    ]));
    for line in &final_step.lines {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", line.kind.label()),
                Style::default().fg(kind_color(line.kind)),
            ),
            Span::raw(format!("{} = ", line.calculation)),
            Span::styled(
                line.result.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if let Some(comparison) = app.change_from_previous() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Change from previous inputs",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for kind in DamageKind::all() {
            let delta = comparison.damage_increase.get(*kind);
            let percent = comparison.percentage_increase.get(*kind);
            let color = if delta > 0.0 {
                Color::Green
            } else if delta < 0.0 {
                Color::Red
            } else {
                Color::DarkGray
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:14}", kind.label()),
                    Style::default().fg(kind_color(*kind)),
                ),
                Span::styled(
                    format!("{:+} ({})", delta, format_percentage(percent, 1)),
                    Style::default().fg(color),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.steps_scroll as u16, 0));
    f.render_widget(paragraph, area);
}

fn header(index: usize, label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}. {}", index, label),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn step_lines(index: usize, step: &CalculationStep) -> Vec<Line<'static>> {
    vec![
        header(index, &step.label),
        Line::from(vec![
            Span::styled("  Formula: ", Style::default().fg(Color::DarkGray)),
            Span::raw(step.formula.clone()),
        ]),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::raw(format!("{} = ", step.calculation)),
            Span::styled(
                format_decimals(step.result, 3),
                Style::default().fg(Color::Green),
            ),
        ]),
    ]
}

fn kind_color(kind: DamageKind) -> Color {
    match kind {
        DamageKind::Normal => Color::White,
        DamageKind::Critical => Color::Yellow,
        DamageKind::AdvantageNormal => Color::Cyan,
        DamageKind::AdvantageCritical => Color::Magenta,
    }
}
