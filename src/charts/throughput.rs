use std::path::Path;

use super::{
    pair_series, save_figure, value_or_zero, BarPanel, Figure, Panel, ReferenceLine, SavedFigure,
    TARGET_LINE_COLOR,
};
use crate::config::{ImageSettings, TARGET_RPS};
use crate::error::Result;
use crate::format::thousands;
use crate::metrics::{ExtractedMetrics, System};

fn axis_categories() -> Vec<String> {
    System::ALL.iter().map(|s| s.axis_label().to_owned()).collect()
}

/// Two panels: achieved RPS against the target line, and total volume.
pub fn throughput_figure(go: Option<&ExtractedMetrics>, java: Option<&ExtractedMetrics>) -> Figure {
    let rps = BarPanel {
        categories: axis_categories(),
        series: vec![pair_series(
            value_or_zero(go, |m| m.rps),
            value_or_zero(java, |m| m.rps),
            thousands,
        )],
        reference: Some(ReferenceLine {
            value: TARGET_RPS,
            label: "Target: 10K RPS".into(),
            color: TARGET_LINE_COLOR,
        }),
        ..BarPanel::default()
    };

    let total = BarPanel {
        categories: axis_categories(),
        series: vec![pair_series(
            value_or_zero(go, |m| m.total_requests),
            value_or_zero(java, |m| m.total_requests),
            thousands,
        )],
        ..BarPanel::default()
    };

    Figure::grid(
        "📊 Throughput Comparison: Target 10,000 RPS",
        1,
        2,
        vec![
            Panel::bars(Some("Requests Per Second"), rps),
            Panel::bars(Some("Total Requests Processed"), total),
        ],
    )
}

pub fn create_throughput_comparison(
    go: Option<&ExtractedMetrics>,
    java: Option<&ExtractedMetrics>,
    output_path: &Path,
    image: &ImageSettings,
) -> Result<SavedFigure> {
    save_figure(&throughput_figure(go, java), output_path, image)
}
