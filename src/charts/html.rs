//! Interactive artifact: a standalone page that hands a Plotly figure
//! (`data` + `layout`) to `Plotly.newPlot`.
//!
//! The JSON goes through `serde_json` with sorted maps, so identical
//! figures always serialize to identical bytes.

use std::fs;
use std::path::Path;

use serde_json::{json, Map, Value};

use super::{BarPanel, BarSeries, Domain, Figure, Fill, PanelContent, TablePanel};
use super::{TABLE_CELL_COLOR, TABLE_HEADER_COLOR};
use crate::error::{ReportError, Result};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const GRID_COLOR: &str = "#EBF0F8";
const TABLE_ROW_HEIGHT: u32 = 30;

pub fn write_html(figure: &Figure, path: &Path) -> Result<()> {
    let page = render_html(figure)?;
    fs::write(path, page).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), panels = figure.panels.len(), "wrote html");
    Ok(())
}

pub fn render_html(figure: &Figure) -> Result<String> {
    let (data, layout) = figure_json(figure);
    let data = serde_json::to_string(&data)?;
    let layout = serde_json::to_string(&layout)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{cdn}" charset="utf-8"></script>
</head>
<body style="margin: 0; background: white;">
    <div id="chart" style="width: 100%; height: {height}px;"></div>
    <script>
        Plotly.newPlot("chart", {data}, {layout}, {{"responsive": true}});
    </script>
</body>
</html>
"#,
        title = escape(&figure.title),
        cdn = PLOTLY_CDN,
        height = figure.height,
    ))
}

// ─── Figure → Plotly JSON ────────────────────────────────────────

/// Plotly names the first subplot's axes `x`/`y` and the n-th `xn`/`yn`.
struct AxisRef {
    x: String,
    y: String,
}

impl AxisRef {
    fn for_panel(number: usize) -> Self {
        if number == 1 {
            Self {
                x: "x".into(),
                y: "y".into(),
            }
        } else {
            Self {
                x: format!("x{number}"),
                y: format!("y{number}"),
            }
        }
    }

    /// `x` → `xaxis`, `x2` → `xaxis2`
    fn layout_key(axis: &str) -> String {
        let (letter, number) = axis.split_at(1);
        format!("{letter}axis{number}")
    }
}

pub fn figure_json(figure: &Figure) -> (Value, Value) {
    let mut traces = Vec::new();
    let mut annotations = Vec::new();
    let mut shapes = Vec::new();
    let mut layout = Map::new();

    for (index, panel) in figure.panels.iter().enumerate() {
        let domain = figure.cell_domain(index);

        if let Some(title) = &panel.title {
            annotations.push(json!({
                "text": title,
                "showarrow": false,
                "xref": "paper",
                "yref": "paper",
                "x": (domain.x[0] + domain.x[1]) / 2.0,
                "y": domain.y[1],
                "xanchor": "center",
                "yanchor": "bottom",
                "font": {"size": figure.font_size + 2},
            }));
        }

        match &panel.content {
            PanelContent::Bars(bars) => {
                let axis = AxisRef::for_panel(index + 1);
                for series in &bars.series {
                    traces.push(bar_trace(series, bars, &axis, figure.legend.is_some()));
                }
                layout.insert(AxisRef::layout_key(&axis.x), x_axis(bars, &axis, domain));
                layout.insert(AxisRef::layout_key(&axis.y), y_axis(bars, &axis, domain));

                if let Some(line) = &bars.reference {
                    let xref = format!("{} domain", axis.x);
                    shapes.push(json!({
                        "type": "line",
                        "xref": xref,
                        "yref": axis.y,
                        "x0": 0,
                        "x1": 1,
                        "y0": line.value,
                        "y1": line.value,
                        "line": {"color": line.color.hex(), "dash": "dash"},
                    }));
                    annotations.push(json!({
                        "text": line.label,
                        "showarrow": false,
                        "xref": xref,
                        "yref": axis.y,
                        "x": 1,
                        "y": line.value,
                        "xanchor": "right",
                        "yanchor": "bottom",
                    }));
                }
            }
            PanelContent::Table(table) => traces.push(table_trace(table, domain)),
        }
    }

    layout.insert(
        "title".into(),
        json!({"text": figure.title, "x": 0.5, "font": {"size": figure.title_size}}),
    );
    layout.insert("height".into(), json!(figure.height));
    layout.insert("barmode".into(), json!("group"));
    layout.insert("font".into(), json!({"size": figure.font_size}));
    layout.insert("paper_bgcolor".into(), json!("white"));
    layout.insert("plot_bgcolor".into(), json!("white"));
    layout.insert("showlegend".into(), json!(figure.legend.is_some()));
    if let Some(legend) = figure.legend {
        layout.insert(
            "legend".into(),
            json!({
                "orientation": "h",
                "yanchor": "bottom",
                "y": 1.02,
                "xanchor": "right",
                "x": legend.x,
            }),
        );
    }
    layout.insert("annotations".into(), Value::Array(annotations));
    layout.insert("shapes".into(), Value::Array(shapes));

    (Value::Array(traces), Value::Object(layout))
}

fn bar_trace(series: &BarSeries, panel: &BarPanel, axis: &AxisRef, legend: bool) -> Value {
    let color = match &series.fill {
        Fill::Uniform(c) => json!(c.hex()),
        Fill::PerBar(colors) => json!(colors.iter().map(|c| c.hex()).collect::<Vec<_>>()),
    };

    json!({
        "type": "bar",
        "name": series.name.clone().unwrap_or_default(),
        "showlegend": legend && series.name.is_some(),
        "x": panel.categories,
        "y": series.values,
        "text": series.labels,
        "textposition": "outside",
        "cliponaxis": false,
        "marker": {"color": color},
        "xaxis": axis.x,
        "yaxis": axis.y,
    })
}

fn x_axis(panel: &BarPanel, axis: &AxisRef, domain: Domain) -> Value {
    let mut value = json!({
        "domain": domain.x,
        "anchor": axis.y,
        "type": "category",
    });
    if let Some(title) = &panel.x_title {
        value["title"] = json!({"text": title});
    }
    value
}

fn y_axis(panel: &BarPanel, axis: &AxisRef, domain: Domain) -> Value {
    let mut value = json!({
        "domain": domain.y,
        "anchor": axis.x,
        "gridcolor": GRID_COLOR,
        "rangemode": "tozero",
    });
    if let Some(title) = &panel.y_title {
        value["title"] = json!({"text": title});
    }
    value
}

fn table_trace(table: &TablePanel, domain: Domain) -> Value {
    // Plotly wants cells column-major.
    let columns: Vec<Vec<&str>> = (0..table.headers.len())
        .map(|col| {
            table
                .rows
                .iter()
                .map(|row| row.get(col).map(String::as_str).unwrap_or(""))
                .collect()
        })
        .collect();

    json!({
        "type": "table",
        "domain": {"x": domain.x, "y": domain.y},
        "header": {
            "values": table.headers,
            "fill": {"color": TABLE_HEADER_COLOR.hex()},
            "font": {"color": "white", "size": 12},
            "align": "center",
        },
        "cells": {
            "values": columns,
            "fill": {"color": TABLE_CELL_COLOR.hex()},
            "font": {"color": "black", "size": 11},
            "align": "center",
            "height": TABLE_ROW_HEIGHT,
        },
    })
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
