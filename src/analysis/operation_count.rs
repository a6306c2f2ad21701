//! Operation count comparison chart

use crate::analysis::constants::{KRUSKAL_COLOR, OPERATION_COUNT_FILE, PRIM_COLOR};
use crate::common::plots::{draw_line_chart, render_png, LineChart, Marker, SeriesData};
use crate::common::{PlotError, PlotStyle, ResultRow};
use std::path::{Path, PathBuf};

/// Figure size in inches
const FIGURE_SIZE: (f64, f64) = (14.0, 7.0);

/// Operation counts are plotted in thousands
const OPERATIONS_UNIT: f64 = 1000.0;

/// Builds the operation count chart: both counters, in thousands, against graph size
pub fn operation_count_chart(rows: &[ResultRow], style: &PlotStyle) -> LineChart {
    let thousands = |count: u64| count as f64 / OPERATIONS_UNIT;

    LineChart {
        title: "MST Algorithm Performance: Operation Count vs Graph Size".to_string(),
        x_desc: "Number of Vertices".to_string(),
        y_desc: "Operation Count (× 1,000)".to_string(),
        series: vec![
            SeriesData::new(
                "Prim's Algorithm",
                rows.iter()
                    .map(|row| (row.vertices as f64, thousands(row.prim_operations)))
                    .collect(),
                PRIM_COLOR,
                Marker::Square,
                style,
            ),
            SeriesData::new(
                "Kruskal's Algorithm",
                rows.iter()
                    .map(|row| (row.vertices as f64, thousands(row.kruskal_operations)))
                    .collect(),
                KRUSKAL_COLOR,
                Marker::Circle,
                style,
            ),
        ],
        annotations: Vec::new(),
    }
}

/// Renders the operation count chart to `operation_count_comparison.png` in `output_dir`
pub fn generate_operation_count_plot(
    rows: &[ResultRow],
    style: &PlotStyle,
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    if rows.is_empty() {
        return Err(PlotError::InvalidData("Rows cannot be empty".to_string()));
    }

    let chart = operation_count_chart(rows, style);
    let output_path = output_dir.join(OPERATION_COUNT_FILE);
    render_png(&output_path, style.figure_size(FIGURE_SIZE), |area| {
        draw_line_chart(area, &chart, style).map(|_| ())
    })?;

    Ok(output_path)
}
