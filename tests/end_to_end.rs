use std::fs;
use std::path::Path;
use std::process::Command;

use bench_graphs::config::{GO_RESULTS_FILE, JAVA_RESULTS_FILE};
use bench_graphs::metrics::System;
use bench_graphs::{run, ReportConfig, ReportError};

const CHART_STEMS: [&str; 4] = [
    "latency-comparison",
    "throughput-comparison",
    "dropped-requests",
    "summary",
];

const GO_EXPORT: &str = r#"{
    "metrics": {
        "http_req_duration": {
            "type": "trend",
            "contains": "time",
            "values": {"avg": 1.42, "min": 0.21, "med": 1.1, "max": 212.7,
                       "p(90)": 2.3, "p(95)": 3.1, "p(99)": 8.9}
        },
        "http_reqs": {"type": "counter", "values": {"count": 1791000, "rate": 9950.0}},
        "dropped_requests": {"type": "counter", "values": {"count": 0, "rate": 0}},
        "errors": {"type": "rate", "values": {"rate": 0, "passes": 0, "fails": 1791000}}
    }
}"#;

const JAVA_EXPORT: &str = r#"{
    "metrics": {
        "http_req_duration": {"values": {"avg": 1805.3, "max": 10000.0,
                                         "p(90)": 4012.0, "p(95)": 5120.5, "p(99)": 9800.0}},
        "http_reqs": {"values": {"count": 198000, "rate": 1100.0}},
        "dropped_requests": {"values": {"count": 1602000}},
        "errors": {"values": {"rate": 1.0}}
    }
}"#;

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn neither_export_present_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let err = run(&ReportConfig::new(dir.path())).unwrap_err();

    assert!(matches!(err, ReportError::NoResults { .. }));
    assert!(entries(dir.path()).is_empty());
}

#[test]
fn missing_directory_is_not_created_without_results() {
    let dir = tempfile::tempdir().unwrap();
    let results = dir.path().join("results/mac");

    let err = run(&ReportConfig::new(&results)).unwrap_err();

    assert!(matches!(err, ReportError::NoResults { .. }));
    assert!(!results.exists());
}

#[test]
fn empty_exports_are_treated_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), GO_RESULTS_FILE, "{}");
    write(dir.path(), JAVA_RESULTS_FILE, "{}");

    let err = run(&ReportConfig::new(dir.path())).unwrap_err();

    assert!(matches!(err, ReportError::NoResults { .. }));
    assert_eq!(entries(dir.path()), [GO_RESULTS_FILE, JAVA_RESULTS_FILE]);
}

#[test]
fn go_only_writes_charts_then_fails_at_report() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        GO_RESULTS_FILE,
        r#"{"metrics": {"http_reqs": {"values": {"rate": 9950}}}}"#,
    );

    let err = run(&ReportConfig::new(dir.path())).unwrap_err();

    assert!(matches!(
        err,
        ReportError::MissingMetrics {
            system: System::Java
        }
    ));
    for stem in CHART_STEMS {
        assert!(dir.path().join(format!("{stem}.html")).is_file(), "{stem}.html");
    }
    assert!(!dir.path().join("RESULTS.md").exists());

    // Java is charted as zeros next to Go's 9950 RPS
    let throughput = fs::read_to_string(dir.path().join("throughput-comparison.html")).unwrap();
    assert!(throughput.contains("[9950.0,0.0]"));
    assert!(throughput.contains("Target: 10K RPS"));
}

#[test]
fn both_exports_produce_full_report() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), GO_RESULTS_FILE, GO_EXPORT);
    write(dir.path(), JAVA_RESULTS_FILE, JAVA_EXPORT);

    let summary = run(&ReportConfig::new(dir.path())).unwrap();

    assert_eq!(summary.html_count(), 4);
    assert!(summary.png_count() <= 4);
    for saved in &summary.charts {
        assert!(saved.html.is_file());
        if let Some(png) = &saved.png {
            assert!(png.is_file());
        }
    }

    let md = fs::read_to_string(&summary.report).unwrap();
    assert!(md.contains("| **Actual RPS** | 9,950 | 1,100 | **9x faster (Go)** |"));
    assert!(md.contains("| **Error Rate** | 0.00% | 100.00% | ✅ |"));
    assert!(md.contains("| **Dropped Requests** | 0 | 1,602,000 | ✅ |"));

    let dashboard = fs::read_to_string(dir.path().join("summary.html")).unwrap();
    assert!(dashboard.contains("Performance Summary"));
    assert!(dashboard.contains("🏆 Go"));
}

#[test]
fn rerun_produces_identical_chart_data() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), GO_RESULTS_FILE, GO_EXPORT);
    write(dir.path(), JAVA_RESULTS_FILE, JAVA_EXPORT);
    let config = ReportConfig::new(dir.path());

    run(&config).unwrap();
    let first: Vec<String> = CHART_STEMS
        .iter()
        .map(|s| fs::read_to_string(config.chart_path(s)).unwrap())
        .collect();

    run(&config).unwrap();
    let second: Vec<String> = CHART_STEMS
        .iter()
        .map(|s| fs::read_to_string(config.chart_path(s)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn malformed_export_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), GO_RESULTS_FILE, GO_EXPORT);
    write(dir.path(), JAVA_RESULTS_FILE, "{ not json");

    let err = run(&ReportConfig::new(dir.path())).unwrap_err();

    match err {
        ReportError::Parse { path, .. } => assert!(path.ends_with(JAVA_RESULTS_FILE)),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(!dir.path().join("latency-comparison.html").exists());
}

#[test]
fn binary_reports_missing_results_on_stdout_and_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bench-graphs"))
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ No benchmark results found. Run benchmarks first."));
    assert!(entries(dir.path()).is_empty());
}
