use std::fs;
use std::path::PathBuf;

use crate::charts::{self, SavedFigure};
use crate::config::{
    ReportConfig, LATENCY_CHART, RELIABILITY_CHART, SUMMARY_CHART, THROUGHPUT_CHART,
};
use crate::error::{ReportError, Result};
use crate::loader::load_results;
use crate::metrics::extract_metrics;
use crate::report::write_report;

/// What a successful run left on disk.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub charts: Vec<SavedFigure>,
    pub report: PathBuf,
}

impl RunSummary {
    pub fn html_count(&self) -> usize {
        self.charts.len()
    }

    pub fn png_count(&self) -> usize {
        self.charts.iter().filter(|c| c.png.is_some()).count()
    }
}

/// Load → extract → four charts → RESULTS.md, strictly in that order.
///
/// Nothing is written when neither export exists. With a single export the
/// charts are still produced (missing side as zeros) and the run then
/// fails at the report, which needs both.
pub fn run(config: &ReportConfig) -> Result<RunSummary> {
    let loaded = load_results(config)?;
    if loaded.is_empty() {
        return Err(ReportError::NoResults {
            dir: config.results_dir.clone(),
        });
    }

    let go = extract_metrics(loaded.go.as_ref());
    let java = extract_metrics(loaded.java.as_ref());
    tracing::debug!(?go, ?java, "extracted metrics");

    println!("\n📈 Generating graphs (HTML + PNG)...\n");

    fs::create_dir_all(&config.results_dir).map_err(|source| ReportError::Write {
        path: config.results_dir.clone(),
        source,
    })?;

    let (go, java) = (go.as_ref(), java.as_ref());
    let image = &config.image;
    let charts = vec![
        charts::create_latency_comparison(go, java, &config.chart_path(LATENCY_CHART), image)?,
        charts::create_throughput_comparison(go, java, &config.chart_path(THROUGHPUT_CHART), image)?,
        charts::create_reliability_comparison(go, java, &config.chart_path(RELIABILITY_CHART), image)?,
        charts::create_summary_dashboard(go, java, &config.chart_path(SUMMARY_CHART), image)?,
    ];

    println!("\n📝 Generating RESULTS.md...\n");
    let report = write_report(&config.report_path(), go, java)?;

    Ok(RunSummary { charts, report })
}
