//! MST cost verification chart
//!
//! Both algorithms must produce a spanning tree of the same total weight. The chart
//! overlays both cost series and stamps a status label summarising the `Cost_Match`
//! column on top of the plotting area.

use crate::analysis::constants::{
    AFFIRMATIVE_COLOR, COST_VERIFICATION_FILE, KRUSKAL_COLOR, PRIM_COLOR, WARNING_COLOR,
};
use crate::common::plots::{draw_line_chart, render_png, LineChart, Marker, SeriesData};
use crate::common::{CostMatch, PlotError, PlotStyle, ResultRow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

/// Figure size in inches
const FIGURE_SIZE: (f64, f64) = (14.0, 7.0);

/// Vertical position of the status label, as a fraction of the plotting area height
const STATUS_TOP: f64 = 0.05;

/// Overall verdict of the `Cost_Match` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostStatus {
    AllMatch,
    MismatchFound,
}

impl CostStatus {
    /// [`CostStatus::AllMatch`] iff every row reports matching costs
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        if rows.iter().all(|row| row.cost_match == CostMatch::Yes) {
            CostStatus::AllMatch
        } else {
            CostStatus::MismatchFound
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CostStatus::AllMatch => "All Costs Match",
            CostStatus::MismatchFound => "Cost Mismatch Found",
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            CostStatus::AllMatch => AFFIRMATIVE_COLOR,
            CostStatus::MismatchFound => WARNING_COLOR,
        }
    }
}

/// Builds the cost chart: Prim solid with squares, Kruskal dashed with smaller circles
pub fn cost_verification_chart(rows: &[ResultRow], style: &PlotStyle) -> LineChart {
    let prim = SeriesData::new(
        "Prim's MST Cost",
        rows.iter()
            .map(|row| (row.vertices as f64, row.prim_cost))
            .collect(),
        PRIM_COLOR,
        Marker::Square,
        style,
    );
    let kruskal = SeriesData {
        dashed: true,
        line_width_pt: 2.0,
        marker_pt: 6.0,
        alpha: 0.7,
        ..SeriesData::new(
            "Kruskal's MST Cost",
            rows.iter()
                .map(|row| (row.vertices as f64, row.kruskal_cost))
                .collect(),
            KRUSKAL_COLOR,
            Marker::Circle,
            style,
        )
    };

    LineChart {
        title: "MST Cost Verification: Both Algorithms Produce Identical Results".to_string(),
        x_desc: "Number of Vertices".to_string(),
        y_desc: "Total MST Cost".to_string(),
        series: vec![prim, kruskal],
        annotations: Vec::new(),
    }
}

/// Draws a boxed status label centred horizontally near the top of `area`
pub fn draw_status<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    status: CostStatus,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let font = style.bold_font(style.status_pt);
    let (text_w, text_h) = area
        .estimate_text_size(status.label(), &TextStyle::from(font.clone()))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let (width, height) = area.dim_in_pixel();
    let center_x = width as i32 / 2;
    let top = (height as f64 * STATUS_TOP).round() as i32;
    let pad = style.px(5.0) as i32;
    let (w, h) = (text_w as i32, text_h as i32);

    let corners = [
        (center_x - w / 2 - pad, top),
        (center_x + w / 2 + pad, top + h + 2 * pad),
    ];
    let color = status.color();

    area.draw(&Rectangle::new(corners, WHITE.mix(0.8).filled()))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    area.draw(&Rectangle::new(corners, color.stroke_width(style.px(2.0))))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    area.draw(&Text::new(
        status.label(),
        (center_x, top + pad),
        font.color(&color).pos(Pos::new(HPos::Center, VPos::Top)),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws both cost series and the status label onto `area`
pub fn draw_cost_verification<DB>(
    area: &DrawingArea<DB, Shift>,
    chart: &LineChart,
    status: CostStatus,
    style: &PlotStyle,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let context = draw_line_chart(area, chart, style)?;
    draw_status(&context.plotting_area().strip_coord_spec(), status, style)
}

/// Renders the cost chart to `cost_verification.png` in `output_dir`
///
/// # Returns
/// * `Ok((PathBuf, CostStatus))` - Path of the written chart and the status it shows
/// * `Err(PlotError)` - If `rows` is empty or rendering failed
pub fn generate_cost_verification_plot(
    rows: &[ResultRow],
    style: &PlotStyle,
    output_dir: &Path,
) -> Result<(PathBuf, CostStatus), PlotError> {
    if rows.is_empty() {
        return Err(PlotError::InvalidData("Rows cannot be empty".to_string()));
    }

    let chart = cost_verification_chart(rows, style);
    let status = CostStatus::from_rows(rows);
    let output_path = output_dir.join(COST_VERIFICATION_FILE);
    render_png(&output_path, style.figure_size(FIGURE_SIZE), |area| {
        draw_cost_verification(area, &chart, status, style)
    })?;

    Ok((output_path, status))
}
