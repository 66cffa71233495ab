pub mod dashboard;
pub mod html;
pub mod latency;
pub mod raster;
pub mod reliability;
pub mod throughput;

pub use dashboard::{create_summary_dashboard, summary_figure};
pub use latency::{create_latency_comparison, latency_figure};
pub use reliability::{create_reliability_comparison, reliability_figure};
pub use throughput::{create_throughput_comparison, throughput_figure};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ImageSettings;
use crate::error::Result;
use crate::metrics::{ExtractedMetrics, System};

// ─── Palette ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const GO_COLOR: Rgb = Rgb(0x00, 0xAD, 0xD8);
pub const JAVA_COLOR: Rgb = Rgb(0xED, 0x8B, 0x00);
pub const TARGET_LINE_COLOR: Rgb = Rgb(0xFF, 0x00, 0x00);
pub const TABLE_HEADER_COLOR: Rgb = Rgb(0x1F, 0x77, 0xB4);
pub const TABLE_CELL_COLOR: Rgb = Rgb(0xF9, 0xF9, 0xF9);

pub fn system_color(system: System) -> Rgb {
    match system {
        System::Go => GO_COLOR,
        System::Java => JAVA_COLOR,
    }
}

// ─── Figure model ────────────────────────────────────────────────
//
// Builders describe *what* to draw; `html` and `raster` decide how.

/// One chart artifact: a title over a rows × cols grid of panels.
/// Panels fill the grid row-major.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub title_size: u32,
    pub font_size: u32,
    /// Layout height of the interactive page (px). The PNG size is fixed
    /// by `ImageSettings` instead.
    pub height: u32,
    pub rows: usize,
    pub cols: usize,
    pub spacing: Spacing,
    pub legend: Option<Legend>,
    pub panels: Vec<Panel>,
}

/// Gaps between grid cells as fractions of the whole figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub horizontal: f64,
    pub vertical: f64,
}

/// Horizontal legend above the plot, right-anchored at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legend {
    pub x: f64,
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub title: Option<String>,
    pub content: PanelContent,
}

#[derive(Debug, Clone)]
pub enum PanelContent {
    Bars(BarPanel),
    Table(TablePanel),
}

#[derive(Debug, Clone, Default)]
pub struct BarPanel {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub reference: Option<ReferenceLine>,
}

/// One trace. `labels` are drawn above each bar.
#[derive(Debug, Clone)]
pub struct BarSeries {
    /// Legend entry; unnamed series stay out of the legend.
    pub name: Option<String>,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Uniform(Rgb),
    PerBar(Vec<Rgb>),
}

/// Dashed horizontal marker, e.g. the target arrival rate.
#[derive(Debug, Clone)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct TablePanel {
    pub headers: Vec<String>,
    /// Row-major cell text; every row has `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Figure {
    /// Single-panel figure with the default spacing.
    pub fn single(title: impl Into<String>, panel: Panel) -> Self {
        Self::grid(title, 1, 1, vec![panel])
    }

    /// Grid with the spacing plotting libraries default to
    /// (0.2 / cols horizontally, 0.3 / rows vertically).
    pub fn grid(title: impl Into<String>, rows: usize, cols: usize, panels: Vec<Panel>) -> Self {
        Self {
            title: title.into(),
            title_size: 24,
            font_size: 14,
            height: 500,
            rows,
            cols,
            spacing: Spacing {
                horizontal: 0.2 / cols as f64,
                vertical: 0.3 / rows as f64,
            },
            legend: None,
            panels,
        }
    }

    /// Paper-coordinate rectangle of panel `index` (row-major), `y` growing
    /// upwards.
    pub fn cell_domain(&self, index: usize) -> Domain {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);
        let row = index / cols;
        let col = index % cols;

        let width = (1.0 - self.spacing.horizontal * (cols - 1) as f64) / cols as f64;
        let height = (1.0 - self.spacing.vertical * (rows - 1) as f64) / rows as f64;

        let x0 = col as f64 * (width + self.spacing.horizontal);
        let y1 = 1.0 - row as f64 * (height + self.spacing.vertical);

        Domain {
            x: [x0, x0 + width],
            y: [y1 - height, y1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Panel {
    pub fn bars(title: Option<&str>, bars: BarPanel) -> Self {
        Self {
            title: title.map(str::to_owned),
            content: PanelContent::Bars(bars),
        }
    }

    pub fn table(title: Option<&str>, table: TablePanel) -> Self {
        Self {
            title: title.map(str::to_owned),
            content: PanelContent::Table(table),
        }
    }
}

impl BarPanel {
    /// Upper bound of the value axis: 15 % headroom over the tallest bar or
    /// reference line, so the labels above the bars fit.
    pub fn y_max(&self) -> f64 {
        let tallest = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .chain(self.reference.as_ref().map(|r| r.value))
            .fold(0.0_f64, f64::max);

        if tallest > 0.0 {
            tallest * 1.15
        } else {
            1.0
        }
    }

    pub fn has_legend_entries(&self) -> bool {
        self.series.iter().any(|s| s.name.is_some())
    }
}

impl Fill {
    pub fn color_at(&self, index: usize) -> Rgb {
        match self {
            Self::Uniform(color) => *color,
            Self::PerBar(colors) => colors
                .get(index)
                .or_else(|| colors.last())
                .copied()
                .unwrap_or(Rgb(0x80, 0x80, 0x80)),
        }
    }
}

// ─── Series helpers used by the builders ─────────────────────────

/// Field of an optional record, charted as 0 when the side is missing.
pub(crate) fn value_or_zero(
    metrics: Option<&ExtractedMetrics>,
    field: impl Fn(&ExtractedMetrics) -> f64,
) -> f64 {
    metrics.map(field).unwrap_or(0.0)
}

/// One named series per system across shared categories.
pub(crate) fn system_series(
    system: System,
    name: &str,
    values: Vec<f64>,
    label: impl Fn(f64) -> String,
) -> BarSeries {
    BarSeries {
        name: Some(name.to_owned()),
        labels: values.iter().map(|v| label(*v)).collect(),
        values,
        fill: Fill::Uniform(system_color(system)),
    }
}

/// A single unnamed trace with one bar per system, Go first.
pub(crate) fn pair_series(go: f64, java: f64, label: impl Fn(f64) -> String) -> BarSeries {
    BarSeries {
        name: None,
        values: vec![go, java],
        labels: vec![label(go), label(java)],
        fill: Fill::PerBar(System::ALL.iter().map(|s| system_color(*s)).collect()),
    }
}

// ─── Saving ──────────────────────────────────────────────────────

/// Files produced for one figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFigure {
    pub html: PathBuf,
    /// `None` when the PNG export failed and was downgraded to a warning.
    pub png: Option<PathBuf>,
}

/// Write the interactive page, then try the PNG next to it.
///
/// HTML errors are fatal. PNG errors (no usable font, encoder failure)
/// only produce a warning, and any half-written image is removed.
pub fn save_figure(figure: &Figure, html_path: &Path, image: &ImageSettings) -> Result<SavedFigure> {
    html::write_html(figure, html_path)?;
    println!("✓ Created: {}", html_path.display());

    let png_path = html_path.with_extension("png");
    let png = match raster::write_png(figure, &png_path, image) {
        Ok(()) => {
            println!("✓ Created: {}", png_path.display());
            Some(png_path)
        }
        Err(e) => {
            tracing::warn!(path = %png_path.display(), error = %format!("{e:#}"), "png export failed");
            println!("⚠ PNG export failed: {e:#}");
            let _ = fs::remove_file(&png_path);
            None
        }
    };

    Ok(SavedFigure {
        html: html_path.to_path_buf(),
        png,
    })
}
