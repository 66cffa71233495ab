use std::path::Path;

use super::{save_figure, system_series, value_or_zero, BarPanel, Figure, Legend, Panel, SavedFigure};
use crate::config::ImageSettings;
use crate::error::Result;
use crate::metrics::{ExtractedMetrics, System};

const CATEGORIES: [&str; 4] = ["Average", "P90", "P95", "Max"];

fn latencies(metrics: Option<&ExtractedMetrics>) -> Vec<f64> {
    vec![
        value_or_zero(metrics, |m| m.avg),
        value_or_zero(metrics, |m| m.p90),
        value_or_zero(metrics, |m| m.p95),
        value_or_zero(metrics, |m| m.max),
    ]
}

/// Grouped bars, one group per percentile, one series per system.
pub fn latency_figure(go: Option<&ExtractedMetrics>, java: Option<&ExtractedMetrics>) -> Figure {
    let label = |v: f64| format!("{v:.1}ms");

    let panel = BarPanel {
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        series: vec![
            system_series(System::Go, System::Go.display_name(), latencies(go), label),
            system_series(System::Java, System::Java.display_name(), latencies(java), label),
        ],
        x_title: Some("Percentile".into()),
        y_title: Some("Latency (ms)".into()),
        reference: None,
    };

    let mut figure = Figure::single(
        "🚀 Latency Comparison: Go vs Java (10K RPS)",
        Panel::bars(None, panel),
    );
    figure.height = 600;
    figure.legend = Some(Legend { x: 1.0 });
    figure
}

pub fn create_latency_comparison(
    go: Option<&ExtractedMetrics>,
    java: Option<&ExtractedMetrics>,
    output_path: &Path,
    image: &ImageSettings,
) -> Result<SavedFigure> {
    save_figure(&latency_figure(go, java), output_path, image)
}
