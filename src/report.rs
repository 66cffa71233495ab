use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::{LATENCY_CHART, RELIABILITY_CHART, SUMMARY_CHART, THROUGHPUT_CHART};
use crate::error::{ReportError, Result};
use crate::format::{millis, percent, thousands};
use crate::metrics::{advantage, winner, Advantage, Direction, ExtractedMetrics, System, Winner};

/// Hand-written notes about how each stack was tuned. Not derived from
/// the exports.
const NARRATIVE: &str = include_str!("../templates/narrative.md");

/// `(stem, heading, image alt, link text)` for each embedded chart.
const CHART_SECTIONS: [(&str, &str, &str, &str); 4] = [
    (LATENCY_CHART, "📈 Latency Comparison", "Latency Comparison", "Open Interactive Latency Chart"),
    (THROUGHPUT_CHART, "🚀 Throughput Comparison", "Throughput Comparison", "Open Interactive Throughput Chart"),
    (
        RELIABILITY_CHART,
        "⚠️ Reliability (Errors & Dropped Requests)",
        "Dropped Requests",
        "Open Interactive Reliability Chart",
    ),
    (SUMMARY_CHART, "📋 Full Dashboard", "Summary Dashboard", "Open Interactive Dashboard"),
];

/// Render RESULTS.md.
///
/// Unlike the charts, the report does not stand in zeros for a missing
/// side: both exports must have been loaded.
pub fn compose_report(
    go: Option<&ExtractedMetrics>,
    java: Option<&ExtractedMetrics>,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let go = go.ok_or(ReportError::MissingMetrics { system: System::Go })?;
    let java = java.ok_or(ReportError::MissingMetrics {
        system: System::Java,
    })?;

    let mut md = String::with_capacity(8 * 1024);

    md.push_str(
        "# 🏆 CryptoX Benchmark Results - Mac Native

**Test Configuration:**
- **Duration:** 3 minutes
- **Target RPS:** 10,000 requests/second
- **Machine:** Apple M4 Pro (14 cores, 24GB RAM)
- **Database:** PostgreSQL 16 (Docker, tuned for 500 connections)

> The configuration above and the optimization notes further down describe
> the intended test setup; they are not read from the result files.

---

## 📊 Summary

",
    );

    md.push_str(&format!(
        "| Metric | {} | {} | Advantage |\n",
        System::Go.display_name(),
        System::Java.display_name()
    ));
    md.push_str("|--------|------------|------------------------|-----------|\n");

    let rows: [(&str, String, String, String); 7] = [
        (
            "Actual RPS",
            thousands(go.rps),
            thousands(java.rps),
            advantage_cell(go.rps, java.rps, Direction::HigherIsBetter),
        ),
        (
            "Avg Latency",
            millis(go.avg, 2),
            millis(java.avg, 2),
            advantage_cell(go.avg, java.avg, Direction::LowerIsBetter),
        ),
        (
            "P90 Latency",
            millis(go.p90, 2),
            millis(java.p90, 2),
            advantage_cell(go.p90, java.p90, Direction::LowerIsBetter),
        ),
        (
            "P95 Latency",
            millis(go.p95, 2),
            millis(java.p95, 2),
            advantage_cell(go.p95, java.p95, Direction::LowerIsBetter),
        ),
        (
            "Error Rate",
            percent(go.error_rate, 2),
            percent(java.error_rate, 2),
            "✅".into(),
        ),
        (
            "Dropped Requests",
            thousands(go.dropped),
            thousands(java.dropped),
            "✅".into(),
        ),
        (
            "Total Requests",
            thousands(go.total_requests),
            thousands(java.total_requests),
            advantage_cell(
                go.total_requests,
                java.total_requests,
                Direction::HigherIsBetter,
            ),
        ),
    ];
    for (label, go_cell, java_cell, adv) in &rows {
        md.push_str(&format!("| **{label}** | {go_cell} | {java_cell} | {adv} |\n"));
    }
    md.push_str("\n---\n\n");

    for (stem, heading, alt, link) in CHART_SECTIONS {
        md.push_str(&format!(
            "## {heading}

![{alt}](./{stem}.png)

<details>
<summary>View Interactive Chart</summary>

[{link}](./{stem}.html)

</details>

---

"
        ));
    }

    md.push_str(NARRATIVE.trim_end());
    md.push_str("\n\n---\n\n");
    md.push_str(&format!(
        "*Generated on: {}*\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    Ok(md)
}

/// `**9x faster (Go)**`, or `**N/A**` when either side is zero.
fn advantage_cell(go: f64, java: f64, direction: Direction) -> String {
    match (winner(go, java, direction), advantage(go, java)) {
        (Winner::System(system), factor @ Advantage::Factor(_)) => {
            format!("**{factor} faster ({system})**")
        }
        _ => "**N/A**".into(),
    }
}

/// Compose and write `<results_dir>/RESULTS.md`, stamped with local time.
pub fn write_report(
    path: &Path,
    go: Option<&ExtractedMetrics>,
    java: Option<&ExtractedMetrics>,
) -> Result<PathBuf> {
    let md = compose_report(go, java, chrono::Local::now().naive_local())?;
    fs::write(path, md).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    println!("✓ Created: {}", path.display());
    Ok(path.to_path_buf())
}
