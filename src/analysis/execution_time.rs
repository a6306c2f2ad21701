//! Execution time comparison chart
//!
//! Plots the execution time of both algorithms against graph size and calls out the
//! slowest run of each.

use crate::analysis::constants::{EXECUTION_TIME_FILE, KRUSKAL_COLOR, PRIM_COLOR};
use crate::common::plots::{
    draw_line_chart, first_max_index, render_png, Annotation, LineChart, Marker, SeriesData,
};
use crate::common::{PlotError, PlotStyle, ResultRow};
use plotters::style::RGBColor;
use std::path::{Path, PathBuf};

/// Figure size in inches
const FIGURE_SIZE: (f64, f64) = (14.0, 7.0);

/// Builds the execution time chart from rows in file order
///
/// The point with the highest time of each algorithm is annotated with its value; when
/// several rows share the highest time, the first one is annotated.
pub fn execution_time_chart(rows: &[ResultRow], style: &PlotStyle) -> LineChart {
    let prim = SeriesData::new(
        "Prim's Algorithm",
        rows.iter()
            .map(|row| (row.vertices as f64, row.prim_time_ms))
            .collect(),
        PRIM_COLOR,
        Marker::Square,
        style,
    );
    let kruskal = SeriesData::new(
        "Kruskal's Algorithm",
        rows.iter()
            .map(|row| (row.vertices as f64, row.kruskal_time_ms))
            .collect(),
        KRUSKAL_COLOR,
        Marker::Circle,
        style,
    );

    let annotations = [
        peak_annotation(rows, |row| row.prim_time_ms, "Prim", PRIM_COLOR, (10.0, 20.0)),
        peak_annotation(
            rows,
            |row| row.kruskal_time_ms,
            "Kruskal",
            KRUSKAL_COLOR,
            (10.0, -30.0),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    LineChart {
        title: "MST Algorithm Performance: Execution Time vs Graph Size".to_string(),
        x_desc: "Number of Vertices".to_string(),
        y_desc: "Execution Time (milliseconds)".to_string(),
        series: vec![prim, kruskal],
        annotations,
    }
}

fn peak_annotation(
    rows: &[ResultRow],
    time_ms: impl Fn(&ResultRow) -> f64,
    name: &str,
    color: RGBColor,
    offset_pt: (f64, f64),
) -> Option<Annotation> {
    let index = first_max_index(rows.iter().map(&time_ms))?;
    let row = &rows[index];
    let value = time_ms(row);

    Some(Annotation {
        point: (row.vertices as f64, value),
        text: format!("{}: {:.2}ms", name, value),
        color,
        offset_pt,
    })
}

/// Renders the execution time chart to `execution_time_comparison.png` in `output_dir`
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written chart
/// * `Err(PlotError)` - If `rows` is empty or rendering failed
pub fn generate_execution_time_plot(
    rows: &[ResultRow],
    style: &PlotStyle,
    output_dir: &Path,
) -> Result<PathBuf, PlotError> {
    if rows.is_empty() {
        return Err(PlotError::InvalidData("Rows cannot be empty".to_string()));
    }

    let chart = execution_time_chart(rows, style);
    let output_path = output_dir.join(EXECUTION_TIME_FILE);
    render_png(&output_path, style.figure_size(FIGURE_SIZE), |area| {
        draw_line_chart(area, &chart, style).map(|_| ())
    })?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_helpers::{example_rows, rgb, row, RecordingBackend};
    use crate::common::CostMatch;
    use plotters::prelude::IntoDrawingArea;

    #[test]
    fn series_follow_file_order() {
        let rows = vec![
            row(500, 5.0, 4.0, CostMatch::Yes),
            row(10, 1.0, 1.5, CostMatch::Yes),
        ];
        let chart = execution_time_chart(&rows, &PlotStyle::default());

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].label, "Prim's Algorithm");
        assert_eq!(chart.series[0].points, vec![(500.0, 5.0), (10.0, 1.0)]);
        assert_eq!(chart.series[0].marker, Marker::Square);
        assert_eq!(chart.series[1].label, "Kruskal's Algorithm");
        assert_eq!(chart.series[1].points, vec![(500.0, 4.0), (10.0, 1.5)]);
        assert_eq!(chart.series[1].marker, Marker::Circle);
    }

    #[test]
    fn annotates_slowest_run_of_each_algorithm() {
        let chart = execution_time_chart(&example_rows(), &PlotStyle::default());

        assert_eq!(chart.annotations.len(), 2);
        assert_eq!(chart.annotations[0].point, (500.0, 5.0));
        assert_eq!(chart.annotations[0].text, "Prim: 5.00ms");
        assert_eq!(chart.annotations[0].color, PRIM_COLOR);
        assert_eq!(chart.annotations[1].point, (500.0, 4.0));
        assert_eq!(chart.annotations[1].text, "Kruskal: 4.00ms");
    }

    #[test]
    fn ties_annotate_first_occurrence() {
        let rows = vec![
            row(10, 2.0, 3.25, CostMatch::Yes),
            row(20, 7.5, 3.25, CostMatch::Yes),
            row(30, 7.5, 1.0, CostMatch::Yes),
        ];
        let chart = execution_time_chart(&rows, &PlotStyle::default());

        assert_eq!(chart.annotations[0].point, (20.0, 7.5));
        assert_eq!(chart.annotations[1].point, (10.0, 3.25));
        assert_eq!(chart.annotations[1].text, "Kruskal: 3.25ms");
    }

    #[test]
    fn draws_callouts_onto_surface() {
        let style = PlotStyle {
            dpi: 72,
            ..PlotStyle::default()
        };
        let (backend, recording) = RecordingBackend::new(style.figure_size(FIGURE_SIZE));
        let area = backend.into_drawing_area();

        draw_line_chart(&area, &execution_time_chart(&example_rows(), &style), &style).unwrap();

        let recording = recording.borrow();
        assert!(recording.has_text("Prim: 5.00ms"));
        assert!(recording.has_text("Kruskal: 4.00ms"));
        assert!(recording.has_text("Prim's Algorithm"));
        assert_eq!(recording.circles_with_color(rgb(KRUSKAL_COLOR)), 2);
    }

    #[test]
    fn rejects_empty_rows() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate_execution_time_plot(&[], &PlotStyle::default(), dir.path());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert!(!dir.path().join(EXECUTION_TIME_FILE).exists());
    }
}
