//! Static artifact: the same figure rasterized with plotters' bitmap
//! backend at `ImageSettings::pixel_size()`.
//!
//! Every size constant below is in logical pixels and gets multiplied by
//! the export scale.

use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{BarPanel, Figure, PanelContent, Rgb, TablePanel};
use super::{TABLE_CELL_COLOR, TABLE_HEADER_COLOR};
use crate::config::ImageSettings;
use crate::format::thousands;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const FONT: &str = "sans-serif";
const PANEL_TITLE_FONT_SIZE: u32 = 16;
const AXIS_LABEL_FONT_SIZE: u32 = 14;
const TICK_LABEL_FONT_SIZE: u32 = 12;
const DATA_LABEL_FONT_SIZE: u32 = 11;
const LEGEND_FONT_SIZE: u32 = 12;
const TABLE_HEADER_FONT_SIZE: u32 = 12;
const TABLE_CELL_FONT_SIZE: u32 = 11;
const TABLE_ROW_HEIGHT: u32 = 30;

const MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 70;

/// Share of each category slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

pub fn write_png(figure: &Figure, path: &Path, image: &ImageSettings) -> Result<()> {
    let scale = image.scale.max(1);
    let root = BitMapBackend::new(path, image.pixel_size()).into_drawing_area();
    root.fill(&WHITE)?;

    let body = root.titled(
        plain_text(&figure.title),
        (FONT, figure.title_size * scale).into_font(),
    )?;
    let cells = body.split_evenly((figure.rows.max(1), figure.cols.max(1)));

    for (panel, cell) in figure.panels.iter().zip(cells.iter()) {
        let title = panel.title.as_deref();
        match &panel.content {
            PanelContent::Bars(bars) => draw_bars(cell, title, bars, scale)?,
            PanelContent::Table(table) => draw_table(cell, title, table, scale)?,
        }
    }

    root.present()?;
    tracing::debug!(path = %path.display(), size = ?image.pixel_size(), "wrote png");
    Ok(())
}

// ─── Bar panels ──────────────────────────────────────────────────

fn draw_bars(area: &Area, title: Option<&str>, panel: &BarPanel, scale: u32) -> Result<()> {
    let slots = panel.categories.len().max(1);
    let x_range = -0.5..(slots as f64 - 0.5);
    let y_top = panel.y_max();

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(MARGIN * scale)
        .x_label_area_size(X_LABEL_AREA * scale)
        .y_label_area_size(Y_LABEL_AREA * scale);
    if let Some(title) = title {
        builder.caption(plain_text(title), (FONT, PANEL_TITLE_FONT_SIZE * scale));
    }
    let mut chart = builder.build_cartesian_2d(x_range, 0.0..y_top)?;

    let categories = &panel.categories;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&|x| category_at(categories, *x))
        .y_label_formatter(&|y| tick_label(*y, y_top))
        .x_desc(panel.x_title.clone().unwrap_or_default())
        .y_desc(panel.y_title.clone().unwrap_or_default())
        .label_style((FONT, TICK_LABEL_FONT_SIZE * scale))
        .axis_desc_style((FONT, AXIS_LABEL_FONT_SIZE * scale))
        .draw()?;

    let series_count = panel.series.len().max(1) as f64;
    let bar_width = GROUP_WIDTH / series_count;
    let gap = 0.02;

    for (series_idx, series) in panel.series.iter().enumerate() {
        let offset = (series_idx as f64 - (series_count - 1.0) / 2.0) * bar_width;

        for (slot, value) in series.values.iter().copied().enumerate() {
            let color: RGBColor = series.fill.color_at(slot).into();
            let x_mid = slot as f64 + offset;

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x_mid - bar_width / 2.0 + gap, 0.0), (x_mid + bar_width / 2.0 - gap, value)],
                color.filled(),
            )))?;

            if let Some(label) = series.labels.get(slot) {
                chart.draw_series(std::iter::once(Text::new(
                    plain_text(label).to_owned(),
                    (x_mid, value + y_top * 0.01),
                    (FONT, DATA_LABEL_FONT_SIZE * scale)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Bottom)),
                )))?;
            }
        }

        // Zero-size marker that only exists to carry the legend entry.
        if let Some(name) = &series.name {
            let color: RGBColor = series.fill.color_at(0).into();
            let swatch = (10 * scale) as i32;
            chart
                .draw_series(std::iter::once(Circle::new((0.0, 0.0), 0, color.filled())))?
                .label(plain_text(name))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - swatch / 2), (x + swatch * 2, y + swatch / 2)], color.filled())
                });
        }
    }

    if let Some(line) = &panel.reference {
        let color: RGBColor = line.color.into();
        chart.draw_series(DashedLineSeries::new(
            vec![(-0.5, line.value), (slots as f64 - 0.5, line.value)],
            10 * scale,
            6 * scale,
            color.stroke_width(2 * scale),
        ))?;
        chart.draw_series(std::iter::once(Text::new(
            plain_text(&line.label).to_owned(),
            (slots as f64 - 0.5, line.value),
            (FONT, DATA_LABEL_FONT_SIZE * scale)
                .into_font()
                .color(&color)
                .pos(Pos::new(HPos::Right, VPos::Bottom)),
        )))?;
    }

    if panel.has_legend_entries() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, LEGEND_FONT_SIZE * scale))
            .draw()?;
    }

    Ok(())
}

/// Tick label for a slot centre; blank between slots.
fn category_at(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

/// Value-axis tick: grouped integers once the axis reaches the thousands,
/// otherwise at most two decimals without trailing zeros.
fn tick_label(value: f64, y_top: f64) -> String {
    if y_top >= 1000.0 {
        return thousands(value);
    }
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// The bundled fonts have no emoji, so leading pictographs (and the space
/// after them) are dropped before drawing. The HTML keeps them.
fn plain_text(text: &str) -> &str {
    text.trim_start_matches(|c: char| !c.is_alphanumeric() && !c.is_ascii_punctuation())
}

// ─── Table panels ────────────────────────────────────────────────

/// Pixel grid of a table panel.
struct TableGeometry {
    col_width: i32,
    row_height: i32,
    border: u32,
}

fn draw_table(area: &Area, title: Option<&str>, table: &TablePanel, scale: u32) -> Result<()> {
    let area = match title {
        Some(title) => area.titled(
            plain_text(title),
            (FONT, PANEL_TITLE_FONT_SIZE * scale).into_font(),
        )?,
        None => area.clone(),
    };
    let pad = (MARGIN * scale) as i32;
    let area = area.margin(pad, pad, pad, pad);

    let columns = table.headers.len().max(1) as i32;
    let lines = table.rows.len() as i32 + 1;
    let (width, height) = area.dim_in_pixel();
    let geometry = TableGeometry {
        col_width: width as i32 / columns,
        row_height: ((TABLE_ROW_HEIGHT * scale) as i32).min(height as i32 / lines),
        border: scale,
    };

    let header_font = (FONT, TABLE_HEADER_FONT_SIZE * scale)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let cell_font = (FONT, TABLE_CELL_FONT_SIZE * scale)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    draw_row(&area, &geometry, 0, &table.headers, TABLE_HEADER_COLOR.into(), &header_font)?;
    for (i, row) in table.rows.iter().enumerate() {
        draw_row(&area, &geometry, i as i32 + 1, row, TABLE_CELL_COLOR.into(), &cell_font)?;
    }

    Ok(())
}

fn draw_row(
    area: &Area,
    geometry: &TableGeometry,
    line: i32,
    cells: &[String],
    fill: RGBColor,
    font: &TextStyle,
) -> Result<()> {
    let top = line * geometry.row_height;
    for (col, text) in cells.iter().enumerate() {
        let left = col as i32 * geometry.col_width;
        let corners = [(left, top), (left + geometry.col_width, top + geometry.row_height)];

        area.draw(&Rectangle::new(corners, fill.filled()))?;
        area.draw(&Rectangle::new(corners, WHITE.stroke_width(geometry.border)))?;
        area.draw(&Text::new(
            plain_text(text).to_owned(),
            (left + geometry.col_width / 2, top + geometry.row_height / 2),
            font.clone(),
        ))?;
    }
    Ok(())
}
