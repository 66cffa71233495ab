use std::path::PathBuf;

use clap::Parser;

// ─── Fixed inputs / outputs ──────────────────────────────────────

/// Where the k6 exports land when no directory is passed.
pub const DEFAULT_RESULTS_DIR: &str = "results/mac";

pub const GO_RESULTS_FILE: &str = "go-10k-results.json";
pub const JAVA_RESULTS_FILE: &str = "java-10k-results.json";

pub const LATENCY_CHART: &str = "latency-comparison";
pub const THROUGHPUT_CHART: &str = "throughput-comparison";
pub const RELIABILITY_CHART: &str = "dropped-requests";
pub const SUMMARY_CHART: &str = "summary";
pub const REPORT_FILE: &str = "RESULTS.md";

/// Arrival rate both services were driven at (requests/second).
pub const TARGET_RPS: f64 = 10_000.0;

// ─── Image settings ──────────────────────────────────────────────

const IMG_WIDTH: u32 = 1200;
const IMG_HEIGHT: u32 = 800;
/// Retina-quality export
const IMG_SCALE: u32 = 2;

/// Raster export size. Every PNG is drawn at `width × height` logical
/// pixels multiplied by `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSettings {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl ImageSettings {
    /// Actual bitmap dimensions handed to the backend.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width * self.scale, self.height * self.scale)
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: IMG_WIDTH,
            height: IMG_HEIGHT,
            scale: IMG_SCALE,
        }
    }
}

// ─── Run configuration ───────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the two exports; all artifacts are written here too.
    pub results_dir: PathBuf,
    pub image: ImageSettings,
}

impl ReportConfig {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            image: ImageSettings::default(),
        }
    }

    pub fn go_results_path(&self) -> PathBuf {
        self.results_dir.join(GO_RESULTS_FILE)
    }

    pub fn java_results_path(&self) -> PathBuf {
        self.results_dir.join(JAVA_RESULTS_FILE)
    }

    /// `<results_dir>/<stem>.html` — the PNG sits next to it.
    pub fn chart_path(&self, stem: &str) -> PathBuf {
        self.results_dir.join(format!("{stem}.html"))
    }

    pub fn report_path(&self) -> PathBuf {
        self.results_dir.join(REPORT_FILE)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_DIR)
    }
}

// ─── CLI ─────────────────────────────────────────────────────────

/// Generate Go vs Java comparison charts and RESULTS.md from k6 exports.
#[derive(Debug, Parser)]
#[command(name = "bench-graphs", version)]
pub struct Cli {
    /// Directory containing go-10k-results.json / java-10k-results.json
    #[arg(default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> ReportConfig {
        ReportConfig::new(self.results_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_mac_results() {
        let cli = Cli::try_parse_from(["bench-graphs"]).unwrap();
        assert_eq!(cli.results_dir, PathBuf::from("results/mac"));
    }

    #[test]
    fn cli_accepts_positional_directory() {
        let cli = Cli::try_parse_from(["bench-graphs", "results/linux"]).unwrap();
        let config = cli.into_config();
        assert_eq!(
            config.go_results_path(),
            PathBuf::from("results/linux/go-10k-results.json")
        );
        assert_eq!(
            config.chart_path(SUMMARY_CHART),
            PathBuf::from("results/linux/summary.html")
        );
    }

    #[test]
    fn cli_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["bench-graphs", "a", "b"]).is_err());
    }

    #[test]
    fn png_is_rendered_at_double_density() {
        assert_eq!(ImageSettings::default().pixel_size(), (2400, 1600));
    }
}
