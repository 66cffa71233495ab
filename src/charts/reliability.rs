use std::path::Path;

use super::{pair_series, save_figure, value_or_zero, BarPanel, Figure, Panel, SavedFigure};
use crate::config::ImageSettings;
use crate::error::Result;
use crate::format::{percent, thousands};
use crate::metrics::{ExtractedMetrics, System};

/// Dropped requests next to error rate.
pub fn reliability_figure(go: Option<&ExtractedMetrics>, java: Option<&ExtractedMetrics>) -> Figure {
    let categories: Vec<String> = System::ALL.iter().map(|s| s.axis_label().to_owned()).collect();

    let dropped = BarPanel {
        categories: categories.clone(),
        series: vec![pair_series(
            value_or_zero(go, |m| m.dropped),
            value_or_zero(java, |m| m.dropped),
            thousands,
        )],
        ..BarPanel::default()
    };

    let errors = BarPanel {
        categories,
        series: vec![pair_series(
            value_or_zero(go, |m| m.error_rate),
            value_or_zero(java, |m| m.error_rate),
            |v| percent(v, 2),
        )],
        ..BarPanel::default()
    };

    Figure::grid(
        "⚠️ Reliability Comparison: Errors & Dropped Requests",
        1,
        2,
        vec![
            Panel::bars(Some("Dropped Requests"), dropped),
            Panel::bars(Some("Error Rate (%)"), errors),
        ],
    )
}

pub fn create_reliability_comparison(
    go: Option<&ExtractedMetrics>,
    java: Option<&ExtractedMetrics>,
    output_path: &Path,
    image: &ImageSettings,
) -> Result<SavedFigure> {
    save_figure(&reliability_figure(go, java), output_path, image)
}
