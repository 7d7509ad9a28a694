//! Data series for the monthly cost comparison chart.

use serde::Serialize;

use crate::core::Estimate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    HumanCost,
    PlatformCost,
    NetBenefit,
}

impl BarKind {
    pub fn label(self) -> &'static str {
        match self {
            BarKind::HumanCost => "Current staff cost",
            BarKind::PlatformCost => "Platform cost (incl. setup/12)",
            BarKind::NetBenefit => "Monthly net benefit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBar {
    pub kind: BarKind,
    pub value: f64,
}

/// Human cost, platform cost with amortized setup, and the net benefit
/// clamped at zero.
pub fn monthly_comparison(estimate: &Estimate) -> Vec<ChartBar> {
    vec![
        ChartBar {
            kind: BarKind::HumanCost,
            value: estimate.human_monthly_cost,
        },
        ChartBar {
            kind: BarKind::PlatformCost,
            value: estimate.ai_total_cost_with_setup,
        },
        ChartBar {
            kind: BarKind::NetBenefit,
            value: estimate.net_benefit.max(0.0),
        },
    ]
}

/// Render bars as rows of `#` scaled to `width` columns.
///
/// Returns `(bar, cells)` pairs; the tallest bar fills the width.
pub fn text_bars(bars: &[ChartBar], width: usize) -> Vec<(ChartBar, String)> {
    let max = bars
        .iter()
        .map(|bar| bar.value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    bars.iter()
        .map(|bar| {
            let cells = if max > 0.0 && bar.value.is_finite() && bar.value > 0.0 {
                ((bar.value / max) * width as f64).round().max(1.0) as usize
            } else {
                0
            };
            (*bar, "#".repeat(cells))
        })
        .collect()
}
