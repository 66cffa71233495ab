use std::path::Path;

use super::{
    pair_series, save_figure, system_series, value_or_zero, BarPanel, Figure, Legend, Panel,
    SavedFigure, Spacing, TablePanel,
};
use crate::config::ImageSettings;
use crate::error::Result;
use crate::format::{millis, percent, thousands};
use crate::metrics::{advantage, winner, Direction, ExtractedMetrics, System};

const TABLE_HEADERS: [&str; 5] = ["Metric", "Go", "Java", "Winner", "Advantage"];

/// One line of the "Performance Summary" table.
struct SummaryRow {
    label: &'static str,
    field: fn(&ExtractedMetrics) -> f64,
    format: fn(f64) -> String,
    direction: Direction,
    /// Error rate has no meaningful ratio (0 % vs 100 %).
    shows_advantage: bool,
}

const SUMMARY_ROWS: [SummaryRow; 5] = [
    SummaryRow {
        label: "Avg Latency",
        field: |m| m.avg,
        format: |v| millis(v, 2),
        direction: Direction::LowerIsBetter,
        shows_advantage: true,
    },
    SummaryRow {
        label: "P95 Latency",
        field: |m| m.p95,
        format: |v| millis(v, 2),
        direction: Direction::LowerIsBetter,
        shows_advantage: true,
    },
    SummaryRow {
        label: "RPS",
        field: |m| m.rps,
        format: thousands,
        direction: Direction::HigherIsBetter,
        shows_advantage: true,
    },
    SummaryRow {
        label: "Error Rate",
        field: |m| m.error_rate,
        format: |v| percent(v, 2),
        direction: Direction::LowerIsBetter,
        shows_advantage: false,
    },
    SummaryRow {
        label: "Total Requests",
        field: |m| m.total_requests,
        format: thousands,
        direction: Direction::HigherIsBetter,
        shows_advantage: true,
    },
];

/// Winner / advantage table. A missing side shows `N/A` in its value
/// column and is compared as 0, which makes winner and advantage `N/A`.
pub fn summary_table(go: Option<&ExtractedMetrics>, java: Option<&ExtractedMetrics>) -> TablePanel {
    let cell = |m: Option<&ExtractedMetrics>, row: &SummaryRow| {
        m.map(|m| (row.format)((row.field)(m)))
            .unwrap_or_else(|| "N/A".into())
    };

    let rows = SUMMARY_ROWS
        .iter()
        .map(|row| {
            let go_value = value_or_zero(go, row.field);
            let java_value = value_or_zero(java, row.field);
            let advantage_cell = if row.shows_advantage {
                advantage(go_value, java_value).to_string()
            } else {
                "N/A".into()
            };

            vec![
                row.label.to_owned(),
                cell(go, row),
                cell(java, row),
                winner(go_value, java_value, row.direction).trophy_label(),
                advantage_cell,
            ]
        })
        .collect();

    TablePanel {
        headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

/// 2×2 overview: latency, RPS, error rate and the summary table.
pub fn summary_figure(go: Option<&ExtractedMetrics>, java: Option<&ExtractedMetrics>) -> Figure {
    let latencies = |m: Option<&ExtractedMetrics>| {
        vec![
            value_or_zero(m, |m| m.avg),
            value_or_zero(m, |m| m.p90),
            value_or_zero(m, |m| m.p95),
        ]
    };
    let one_decimal = |v: f64| format!("{v:.1}");
    let names: Vec<String> = System::ALL.iter().map(|s| s.name().to_owned()).collect();

    let latency = BarPanel {
        categories: vec!["Avg".into(), "P90".into(), "P95".into()],
        series: vec![
            system_series(System::Go, System::Go.name(), latencies(go), one_decimal),
            system_series(System::Java, System::Java.name(), latencies(java), one_decimal),
        ],
        ..BarPanel::default()
    };

    let rps = BarPanel {
        categories: names.clone(),
        series: vec![pair_series(
            value_or_zero(go, |m| m.rps),
            value_or_zero(java, |m| m.rps),
            thousands,
        )],
        ..BarPanel::default()
    };

    let errors = BarPanel {
        categories: names,
        series: vec![pair_series(
            value_or_zero(go, |m| m.error_rate),
            value_or_zero(java, |m| m.error_rate),
            |v| percent(v, 1),
        )],
        ..BarPanel::default()
    };

    let mut figure = Figure::grid(
        "📈 CryptoX Benchmark: Go vs Java (10K RPS Target)",
        2,
        2,
        vec![
            Panel::bars(Some("Latency (ms) - Lower is Better"), latency),
            Panel::bars(Some("Throughput (RPS) - Higher is Better"), rps),
            Panel::bars(Some("Error Rate (%) - Lower is Better"), errors),
            Panel::table(Some("Performance Summary"), summary_table(go, java)),
        ],
    );
    figure.title_size = 26;
    figure.font_size = 12;
    figure.height = 900;
    figure.spacing = Spacing {
        horizontal: 0.1,
        vertical: 0.15,
    };
    figure.legend = Some(Legend { x: 0.5 });
    figure
}

pub fn create_summary_dashboard(
    go: Option<&ExtractedMetrics>,
    java: Option<&ExtractedMetrics>,
    output_path: &Path,
    image: &ImageSettings,
) -> Result<SavedFigure> {
    save_figure(&summary_figure(go, java), output_path, image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::PanelContent;

    fn go() -> ExtractedMetrics {
        ExtractedMetrics {
            avg: 1.5,
            p90: 2.4,
            p95: 3.0,
            rps: 9950.0,
            error_rate: 0.0,
            total_requests: 1_791_000.0,
            ..Default::default()
        }
    }

    fn java() -> ExtractedMetrics {
        ExtractedMetrics {
            avg: 1800.0,
            p90: 4000.0,
            p95: 5000.0,
            rps: 1100.0,
            error_rate: 100.0,
            total_requests: 198_000.0,
            ..Default::default()
        }
    }

    #[test]
    fn table_declares_winners_and_ratios() {
        let table = summary_table(Some(&go()), Some(&java()));
        assert_eq!(table.headers, TABLE_HEADERS);

        assert_eq!(
            table.rows[0],
            ["Avg Latency", "1.50 ms", "1800.00 ms", "🏆 Go", "1200x"]
        );
        assert_eq!(table.rows[2], ["RPS", "9,950", "1,100", "🏆 Go", "9x"]);
        // Go's 0 % error rate makes the comparison N/A
        assert_eq!(table.rows[3], ["Error Rate", "0.00%", "100.00%", "N/A", "N/A"]);
        assert_eq!(
            table.rows[4],
            ["Total Requests", "1,791,000", "198,000", "🏆 Go", "9x"]
        );
    }

    #[test]
    fn missing_side_reads_not_applicable() {
        let table = summary_table(Some(&go()), None);
        for row in &table.rows {
            assert_eq!(row[2], "N/A", "row {}", row[0]);
            assert_eq!(row[3], "N/A");
            assert_eq!(row[4], "N/A");
        }
        assert_eq!(table.rows[1][1], "3.00 ms");
    }

    #[test]
    fn dashboard_is_a_two_by_two_grid_ending_in_the_table() {
        let fig = summary_figure(Some(&go()), Some(&java()));
        assert_eq!((fig.rows, fig.cols), (2, 2));
        assert_eq!(fig.height, 900);
        assert_eq!(fig.panels.len(), 4);
        assert!(matches!(fig.panels[3].content, PanelContent::Table(_)));

        match &fig.panels[0].content {
            PanelContent::Bars(b) => {
                assert_eq!(b.categories, ["Avg", "P90", "P95"]);
                assert_eq!(b.series[1].values, [1800.0, 4000.0, 5000.0]);
                assert_eq!(b.series[0].name.as_deref(), Some("Go"));
            }
            PanelContent::Table(_) => panic!("expected bars"),
        }
    }
}
