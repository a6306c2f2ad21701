//! Per-graph performance advantage chart
//!
//! Each row becomes one bar at its vertex count whose height is the Kruskal time minus
//! the Prim time. Bars are coloured by the sign of that difference.

use crate::analysis::constants::{AFFIRMATIVE_COLOR, PERFORMANCE_ADVANTAGE_FILE, WARNING_COLOR};
use crate::common::plots::{
    build_xy_chart, draw_bar_group, draw_legend, draw_mesh, padded_range, render_png, Bar,
};
use crate::common::{PlotError, PlotStyle, ResultRow};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Figure size in inches
const FIGURE_SIZE: (f64, f64) = (14.0, 7.0);

/// Bar width as a fraction of the closest spacing between two vertex counts
const BAR_FILL_RATIO: f64 = 0.8;

const BAR_ALPHA: f64 = 0.7;

/// Which algorithm a time difference favours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    PrimFaster,
    KruskalFaster,
}

impl Advantage {
    /// Legend order
    pub const ALL: [Advantage; 2] = [Advantage::PrimFaster, Advantage::KruskalFaster];

    /// Classifies `kruskal - prim`; a difference of exactly zero counts as Kruskal
    pub fn from_difference(difference_ms: f64) -> Self {
        if difference_ms < 0.0 {
            Advantage::PrimFaster
        } else {
            Advantage::KruskalFaster
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Advantage::PrimFaster => "Prim Faster",
            Advantage::KruskalFaster => "Kruskal Faster",
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            Advantage::PrimFaster => AFFIRMATIVE_COLOR,
            Advantage::KruskalFaster => WARNING_COLOR,
        }
    }
}

/// A single bar of the advantage chart
#[derive(Debug, Clone, PartialEq)]
pub struct AdvantageBar {
    pub advantage: Advantage,
    pub bar: Bar,
}

/// Width of every bar: a fraction of the smallest gap between distinct vertex counts
///
/// Falls back to `1.0` when fewer than two distinct vertex counts exist.
pub fn bar_width(rows: &[ResultRow]) -> f64 {
    let mut vertices: Vec<u32> = rows.iter().map(|row| row.vertices).collect();
    vertices.sort_unstable();
    vertices.dedup();

    vertices
        .windows(2)
        .map(|pair| f64::from(pair[1] - pair[0]))
        .reduce(f64::min)
        .map(|gap| gap * BAR_FILL_RATIO)
        .unwrap_or(1.0)
}

/// One bar per row, in file order
pub fn advantage_bars(rows: &[ResultRow]) -> Vec<AdvantageBar> {
    let width = bar_width(rows);
    rows.iter()
        .map(|row| {
            let difference = row.time_difference_ms();
            AdvantageBar {
                advantage: Advantage::from_difference(difference),
                bar: Bar::centered(row.vertices as f64, width, difference),
            }
        })
        .collect()
}

/// Draws the advantage bars, the zero reference line and the colour legend onto `area`
pub fn draw_performance_advantage<DB>(
    area: &DrawingArea<DB, Shift>,
    bars: &[AdvantageBar],
    style: &PlotStyle,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    if bars.is_empty() {
        return Err(PlotError::InvalidData("Bars cannot be empty".to_string()));
    }

    let x_range = padded_range(bars.iter().flat_map(|b| [b.bar.left, b.bar.right]));
    // Zero is always in view for the reference line
    let y_range = padded_range(bars.iter().map(|b| b.bar.value).chain([0.0]));

    let mut chart = build_xy_chart(
        area,
        style,
        "Performance Advantage: Negative = Prim Faster, Positive = Kruskal Faster",
        x_range.clone(),
        y_range,
    )?;
    draw_mesh(
        &mut chart,
        style,
        "Number of Vertices",
        "Time Difference: Kruskal - Prim (ms)",
    )?;

    for advantage in Advantage::ALL {
        let group: Vec<Bar> = bars
            .iter()
            .filter(|b| b.advantage == advantage)
            .map(|b| b.bar.clone())
            .collect();
        draw_bar_group(
            &mut chart,
            &group,
            advantage.color(),
            BAR_ALPHA,
            advantage.label(),
            style,
        )?;
    }

    chart
        .draw_series(LineSeries::new(
            [(x_range.start, 0.0), (x_range.end, 0.0)],
            BLACK.stroke_width(style.px(2.0)),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    draw_legend(&mut chart, style, SeriesLabelPosition::UpperRight)
}

/// Renders the advantage chart to `performance_advantage.png` in `output_dir`
pub fn generate_performance_advantage_plot(
    rows: &[ResultRow],
    style: &PlotStyle,
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    let bars = advantage_bars(rows);
    if bars.is_empty() {
        return Err(PlotError::InvalidData("Rows cannot be empty".to_string()));
    }

    let output_path = output_dir.join(PERFORMANCE_ADVANTAGE_FILE);
    render_png(&output_path, style.figure_size(FIGURE_SIZE), |area| {
        draw_performance_advantage(area, &bars, style)
    })?;

    Ok(output_path)
}
