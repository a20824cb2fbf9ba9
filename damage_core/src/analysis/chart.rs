//! Bar chart data for the four damage outcomes

use crate::damage::DamageResults;
use crate::types::DamageKind;
use serde::Serialize;

/// One bar: outcome, value and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarChartEntry {
    pub kind: DamageKind,
    pub damage: u64,
    /// `#rrggbb`
    pub color: &'static str,
}

impl BarChartEntry {
    /// Colour as an `(r, g, b)` triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

fn color_for(kind: DamageKind) -> &'static str {
    match kind {
        DamageKind::Normal => "#8884d8",
        DamageKind::Critical => "#82ca9d",
        DamageKind::AdvantageNormal => "#ffc658",
        DamageKind::AdvantageCritical => "#ff7300",
    }
}

/// Chart bars in display order
pub fn bar_chart_data(results: &DamageResults) -> [BarChartEntry; 4] {
    let entry = |kind: DamageKind| BarChartEntry {
        kind,
        damage: results.damage(kind),
        color: color_for(kind),
    };
    [
        entry(DamageKind::Normal),
        entry(DamageKind::Critical),
        entry(DamageKind::AdvantageNormal),
        entry(DamageKind::AdvantageCritical),
    ]
}
