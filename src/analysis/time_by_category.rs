//! Average execution time by graph size category
//!
//! Rows are bucketed into [`Category`] values and the mean time of each algorithm is
//! drawn as a grouped bar chart, one bar pair per category. Categories without rows
//! keep their slot on the axis but get no bars.

use crate::analysis::constants::{KRUSKAL_COLOR, PRIM_COLOR, TIME_BY_CATEGORY_FILE};
use crate::common::buckets::{category_averages, CategoryAverages};
use crate::common::plots::{
    build_xy_chart, draw_bar_group, draw_legend, format_tick, render_png, Bar, XyChart,
};
use crate::common::{Category, PlotError, PlotStyle, ResultRow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

/// Figure size in inches
const FIGURE_SIZE: (f64, f64) = (12.0, 7.0);

/// Width of a single bar; a category slot is 1.0 wide
const BAR_WIDTH: f64 = 0.35;

/// Headroom above the tallest bar for its value label
const LABEL_HEADROOM: f64 = 1.15;

/// Bars of one algorithm with their value labels
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: &'static str,
    pub color: RGBColor,
    pub bars: Vec<Bar>,
}

/// Lays out the grouped bars: Prim left of each category slot, Kruskal right of it
///
/// Slot `i` is centred on `x = i` in [`Category::ALL`] order.
pub fn category_bar_groups(averages: &[CategoryAverages]) -> [BarGroup; 2] {
    let bars = |offset: f64, value: fn(&CategoryAverages) -> Option<f64>| -> Vec<Bar> {
        averages
            .iter()
            .filter_map(|averages| {
                let slot = category_slot(averages.category) as f64;
                value(averages).map(|ms| Bar::centered(slot + offset, BAR_WIDTH, ms))
            })
            .collect()
    };

    [
        BarGroup {
            label: "Prim's Algorithm",
            color: PRIM_COLOR,
            bars: bars(-BAR_WIDTH / 2.0, |a| a.prim_time_ms),
        },
        BarGroup {
            label: "Kruskal's Algorithm",
            color: KRUSKAL_COLOR,
            bars: bars(BAR_WIDTH / 2.0, |a| a.kruskal_time_ms),
        },
    ]
}

fn category_slot(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or_default()
}

/// Text printed above a bar
pub fn bar_label(value_ms: f64) -> String {
    format!("{:.2}ms", value_ms)
}

/// Axis label for a position on the category axis; only slot centres are labelled
pub fn category_tick_label(x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }

    Category::ALL
        .get(slot as usize)
        .map(|category| category.name().to_string())
        .unwrap_or_default()
}

/// Draws the grouped bar chart for precomputed category averages onto `area`
pub fn draw_time_by_category<DB>(
    area: &DrawingArea<DB, Shift>,
    averages: &[CategoryAverages],
    style: &PlotStyle,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let groups = category_bar_groups(averages);
    let tallest = groups
        .iter()
        .flat_map(|group| group.bars.iter().map(|bar| bar.value))
        .fold(0.0, f64::max);
    let y_max = if tallest > 0.0 {
        tallest * LABEL_HEADROOM
    } else {
        1.0
    };

    let slots = Category::ALL.len() as f64;
    let mut chart = build_xy_chart(
        area,
        style,
        "Average Execution Time by Graph Size Category",
        -0.6..(slots - 0.4),
        0.0..y_max,
    )?;
    draw_category_mesh(&mut chart, style)?;

    for group in &groups {
        draw_bar_group(&mut chart, &group.bars, group.color, 0.9, group.label, style)?;
    }

    let label_font = style.bold_font(style.annotation_pt);
    for bar in groups.iter().flat_map(|group| group.bars.iter()) {
        chart
            .draw_series(std::iter::once(Text::new(
                bar_label(bar.value),
                (bar.center(), bar.value),
                label_font
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    draw_legend(&mut chart, style, SeriesLabelPosition::UpperLeft)
}

fn draw_category_mesh<DB: DrawingBackend>(
    chart: &mut XyChart<'_, DB>,
    style: &PlotStyle,
) -> Result<(), PlotError> {
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(Category::ALL.len() * 2 + 1)
        .x_desc("Graph Category")
        .y_desc("Average Execution Time (ms)")
        .axis_desc_style(style.bold_font(style.axis_label_pt))
        .label_style(style.font(style.tick_pt))
        .x_label_formatter(&|x| category_tick_label(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .bold_line_style(&BLACK.mix(style.grid_alpha * 0.5))
        .light_line_style(&TRANSPARENT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

/// Renders the category chart to `time_by_category.png` in `output_dir`
///
/// # Returns
/// * `Ok((PathBuf, Vec<CategoryAverages>))` - Path of the written chart and the plotted averages
/// * `Err(PlotError)` - If `rows` is empty or rendering failed
pub fn generate_time_by_category_plot(
    rows: &[ResultRow],
    style: &PlotStyle,
    output_dir: &Path,
) -> Result<(PathBuf, Vec<CategoryAverages>), PlotError> {
    if rows.is_empty() {
        return Err(PlotError::InvalidData("Rows cannot be empty".to_string()));
    }

    let averages = category_averages(rows);
    let output_path = output_dir.join(TIME_BY_CATEGORY_FILE);
    render_png(&output_path, style.figure_size(FIGURE_SIZE), |area| {
        draw_time_by_category(area, &averages, style)
    })?;

    Ok((output_path, averages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_helpers::{example_rows, rgb, RecordingBackend};

    #[test]
    fn empty_categories_get_no_bars() {
        let averages = category_averages(&example_rows());
        let [prim, kruskal] = category_bar_groups(&averages);

        // Small (slot 0) and Large (slot 2) only
        assert_eq!(
            prim.bars,
            vec![
                Bar::centered(-BAR_WIDTH / 2.0, BAR_WIDTH, 1.0),
                Bar::centered(2.0 - BAR_WIDTH / 2.0, BAR_WIDTH, 5.0)
            ]
        );
        assert_eq!(
            kruskal.bars,
            vec![
                Bar::centered(BAR_WIDTH / 2.0, BAR_WIDTH, 1.5),
                Bar::centered(2.0 + BAR_WIDTH / 2.0, BAR_WIDTH, 4.0)
            ]
        );
        assert_eq!(prim.color, PRIM_COLOR);
        assert_eq!(kruskal.color, KRUSKAL_COLOR);
    }

    #[test]
    fn bar_labels_use_two_decimals() {
        assert_eq!(bar_label(1.0), "1.00ms");
        assert_eq!(bar_label(12.345), "12.35ms");
        assert_eq!(bar_label(0.004), "0.00ms");
    }

    #[test]
    fn tick_labels_only_at_slot_centres() {
        assert_eq!(category_tick_label(0.0), "Small");
        assert_eq!(category_tick_label(1.0), "Medium");
        assert_eq!(category_tick_label(2.0), "Large");
        assert_eq!(category_tick_label(3.0), "Extra Large");
        assert_eq!(category_tick_label(0.5), "");
        assert_eq!(category_tick_label(-1.0), "");
        assert_eq!(category_tick_label(4.0), "");
    }

    #[test]
    fn draws_one_labelled_bar_per_populated_category() {
        let style = PlotStyle {
            dpi: 72,
            ..PlotStyle::default()
        };
        let (backend, recording) = RecordingBackend::new(style.figure_size(FIGURE_SIZE));
        let area = backend.into_drawing_area();

        draw_time_by_category(&area, &category_averages(&example_rows()), &style).unwrap();

        let recording = recording.borrow();
        for label in ["1.00ms", "1.50ms", "5.00ms", "4.00ms"] {
            assert!(recording.has_text(label), "missing bar label {label}");
        }
        // Every slot is labelled, populated or not
        for category in Category::ALL {
            assert!(recording.has_text(category.name()), "missing tick {category:?}");
        }
        // Two bars plus the legend swatch per algorithm
        assert_eq!(recording.filled_rects_with_color(rgb(PRIM_COLOR)), 3);
        assert_eq!(recording.filled_rects_with_color(rgb(KRUSKAL_COLOR)), 3);
    }

    #[test]
    fn category_ticks_render_at_print_resolution() {
        let style = PlotStyle::default();
        let (backend, recording) = RecordingBackend::new(style.figure_size(FIGURE_SIZE));
        let area = backend.into_drawing_area();

        draw_time_by_category(&area, &category_averages(&example_rows()), &style).unwrap();

        let recording = recording.borrow();
        for category in Category::ALL {
            assert!(recording.has_text(category.name()), "missing tick {category:?}");
        }
    }

    #[test]
    fn draws_nothing_for_all_empty_averages() {
        let style = PlotStyle {
            dpi: 72,
            ..PlotStyle::default()
        };
        let (backend, recording) = RecordingBackend::new(style.figure_size(FIGURE_SIZE));
        let area = backend.into_drawing_area();

        draw_time_by_category(&area, &category_averages(&[]), &style).unwrap();

        let recording = recording.borrow();
        assert!(recording.has_text("Extra Large"));
        assert!(!recording.texts.iter().any(|(text, _)| text.ends_with("ms")));
        // Legend swatches only
        assert_eq!(recording.filled_rects_with_color(rgb(PRIM_COLOR)), 1);
    }
}
