//! Execution time against edge count, one scatter panel per algorithm

use crate::analysis::constants::{KRUSKAL_COLOR, PRIM_COLOR, TIME_VS_EDGES_FILE};
use crate::common::plots::{build_xy_chart, draw_mesh, padded_range, render_png};
use crate::common::{PlotError, PlotStyle, ResultRow};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Figure size in inches
const FIGURE_SIZE: (f64, f64) = (16.0, 6.0);

/// Radius of a scatter point, in points
const POINT_RADIUS_PT: f64 = 5.0;

const POINT_ALPHA: f64 = 0.6;

/// A single scatter plot
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPanel {
    pub title: &'static str,
    /// `(edges, time_ms)` pairs in file order
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
}

/// Builds the Prim (left) and Kruskal (right) panels
pub fn time_vs_edges_panels(rows: &[ResultRow]) -> [ScatterPanel; 2] {
    let points = |time_ms: fn(&ResultRow) -> f64| -> Vec<(f64, f64)> {
        rows.iter()
            .map(|row| (row.edges as f64, time_ms(row)))
            .collect()
    };

    [
        ScatterPanel {
            title: "Prim's Algorithm: Time vs Edges",
            points: points(|row| row.prim_time_ms),
            color: PRIM_COLOR,
        },
        ScatterPanel {
            title: "Kruskal's Algorithm: Time vs Edges",
            points: points(|row| row.kruskal_time_ms),
            color: KRUSKAL_COLOR,
        },
    ]
}

/// Draws one panel onto its own half of the figure
pub fn draw_scatter_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &ScatterPanel,
    style: &PlotStyle,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_range = padded_range(panel.points.iter().map(|p| p.0));
    let y_range = padded_range(panel.points.iter().map(|p| p.1));

    let mut chart = build_xy_chart(area, style, panel.title, x_range, y_range)?;
    draw_mesh(&mut chart, style, "Number of Edges", "Execution Time (ms)")?;

    let radius = style.px(POINT_RADIUS_PT);
    let fill = panel.color.mix(POINT_ALPHA).filled();
    let edge = BLACK.stroke_width(style.px(1.0));
    chart
        .draw_series(panel.points.iter().map(|&point| {
            EmptyElement::at(point)
                + Circle::new((0, 0), radius, fill)
                + Circle::new((0, 0), radius, edge)
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Splits `area` into two side-by-side halves and draws one panel into each
pub fn draw_time_vs_edges<DB>(
    area: &DrawingArea<DB, Shift>,
    panels: &[ScatterPanel; 2],
    style: &PlotStyle,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let halves = area.split_evenly((1, 2));
    for (half, panel) in halves.iter().zip(panels) {
        draw_scatter_panel(half, panel, style)?;
    }
    Ok(())
}

/// Renders both scatter panels to `time_vs_edges.png` in `output_dir`
pub fn generate_time_vs_edges_plot(
    rows: &[ResultRow],
    style: &PlotStyle,
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    if rows.is_empty() {
        return Err(PlotError::InvalidData("Rows cannot be empty".to_string()));
    }

    let panels = time_vs_edges_panels(rows);
    let output_path = output_dir.join(TIME_VS_EDGES_FILE);
    render_png(&output_path, style.figure_size(FIGURE_SIZE), |area| {
        draw_time_vs_edges(area, &panels, style)
    })?;

    Ok(output_path)
}
