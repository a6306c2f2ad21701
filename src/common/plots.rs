//! Plotting infrastructure shared by all benchmark charts
//!
//! This module provides the rendering configuration ([`PlotStyle`]), the data shapes
//! charts are described with ([`LineChart`], [`SeriesData`], [`Annotation`]) and the
//! drawing routines that turn them into pixels using the [`plotters`] crate.
//!
//! Drawing routines are generic over [`DrawingBackend`], so a chart can be drawn onto
//! any surface. [`render_png`] provides the bitmap surface used for the saved charts.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// A 2D chart with floating point axes on both sides
pub type XyChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Points per inch; font and line sizes are specified in points
const POINTS_PER_INCH: f64 = 72.0;

/// Fraction of the data span added on either side of an axis
const AXIS_MARGIN: f64 = 0.05;

/// Length and gap of the dashes in dashed series, in points
const DASH_PT: f64 = 6.0;
const DASH_GAP_PT: f64 = 3.0;

/// Immutable rendering configuration shared by every chart of a run
///
/// Sizes are given in typographic points and converted to pixels with [`PlotStyle::px`],
/// so changing [`PlotStyle::dpi`] scales the whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Output resolution in dots per inch
    pub dpi: u32,
    pub title_pt: f64,
    pub axis_label_pt: f64,
    pub tick_pt: f64,
    pub legend_pt: f64,
    pub annotation_pt: f64,
    pub status_pt: f64,
    pub line_width_pt: f64,
    pub marker_pt: f64,
    /// Space between the figure edge and the chart, kept small for a tight bounding box
    pub margin_pt: f64,
    /// Opacity of grid lines
    pub grid_alpha: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            dpi: 300,
            title_pt: 15.0,
            axis_label_pt: 13.0,
            tick_pt: 11.0,
            legend_pt: 12.0,
            annotation_pt: 10.0,
            status_pt: 14.0,
            line_width_pt: 2.5,
            marker_pt: 8.0,
            margin_pt: 8.0,
            grid_alpha: 0.3,
        }
    }
}

impl PlotStyle {
    /// Converts a length in points into whole pixels at the configured DPI (minimum 1)
    pub fn px(&self, points: f64) -> u32 {
        ((points * self.dpi as f64) / POINTS_PER_INCH).round().max(1.0) as u32
    }

    /// Pixel dimensions of a figure given in inches
    pub fn figure_size(&self, (width_in, height_in): (f64, f64)) -> (u32, u32) {
        let dpi = self.dpi as f64;
        ((width_in * dpi).round() as u32, (height_in * dpi).round() as u32)
    }

    pub fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(points) as f64, FontStyle::Normal)
    }

    pub fn bold_font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(points) as f64, FontStyle::Bold)
    }
}

/// Point marker drawn at every data point of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// One labelled line series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub marker: Marker,
    pub dashed: bool,
    /// Line width in points
    pub line_width_pt: f64,
    /// Marker size (diameter / edge length) in points
    pub marker_pt: f64,
    pub alpha: f64,
}

impl SeriesData {
    /// Solid series using the default line and marker sizes of `style`
    pub fn new(
        label: impl Into<String>,
        points: Vec<(f64, f64)>,
        color: RGBColor,
        marker: Marker,
        style: &PlotStyle,
    ) -> Self {
        Self {
            label: label.into(),
            points,
            color,
            marker,
            dashed: false,
            line_width_pt: style.line_width_pt,
            marker_pt: style.marker_pt,
            alpha: 0.9,
        }
    }
}

/// A value callout pointing at a single data point
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Data point the callout points at
    pub point: (f64, f64),
    pub text: String,
    pub color: RGBColor,
    /// Offset of the callout text from the point, in points (positive y is up)
    pub offset_pt: (f64, f64),
}

/// A complete line chart: axes, series and callouts
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub series: Vec<SeriesData>,
    pub annotations: Vec<Annotation>,
}

/// A vertical bar spanning `left..right` from zero up (or down) to `value`
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub left: f64,
    pub right: f64,
    pub value: f64,
}

impl Bar {
    /// Bar of the given width centred on `center`
    pub fn centered(center: f64, width: f64, value: f64) -> Self {
        Self {
            left: center - width / 2.0,
            right: center + width / 2.0,
            value,
        }
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Creates a PNG surface of the given pixel size, lets `draw` render onto it and saves it
///
/// The surface is cleared to white before drawing. An existing file at `output_path`
/// is overwritten.
pub fn render_png<F>(output_path: &Path, size: (u32, u32), draw: F) -> Result<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    draw(&root)?;

    root.present()
        .map_err(|e| PlotError::FileSave(e.to_string()))?;
    log::debug!("Wrote {}x{} chart to {}", size.0, size.1, output_path.display());
    Ok(())
}

/// Returns an axis range covering all finite `values`, padded on both sides
///
/// A single distinct value gets a fixed-size window around it; no finite values
/// yield `0.0..1.0`.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * AXIS_MARGIN
    } else {
        (max.abs() * AXIS_MARGIN).max(0.5)
    };
    (min - pad)..(max + pad)
}

/// Formats an axis tick without float noise: whole numbers get no decimals
pub fn format_tick(value: f64) -> String {
    // `+ 0.0` turns -0.0 into 0.0
    let rounded = (value * 1e6).round() / 1e6 + 0.0;
    if rounded == rounded.trunc() {
        format!("{:.0}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Builds a floating point chart with a bold caption on `area`
pub fn build_xy_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    style: &PlotStyle,
    title: &str,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<XyChart<'a, DB>> {
    ChartBuilder::on(area)
        .caption(title, style.bold_font(style.title_pt))
        .margin(style.px(style.margin_pt))
        .x_label_area_size(style.px(40.0))
        .y_label_area_size(style.px(56.0))
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))
}

/// Draws axes, tick labels, axis descriptions and the background grid
pub fn draw_mesh<DB: DrawingBackend>(
    chart: &mut XyChart<'_, DB>,
    style: &PlotStyle,
    x_desc: &str,
    y_desc: &str,
) -> Result<()> {
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style(style.bold_font(style.axis_label_pt))
        .label_style(style.font(style.tick_pt))
        .x_label_formatter(&|x| format_tick(*x))
        .y_label_formatter(&|y| format_tick(*y))
        .bold_line_style(&BLACK.mix(style.grid_alpha * 0.5))
        .light_line_style(&TRANSPARENT)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

/// Draws the legend box for every labelled series of `chart`
pub fn draw_legend<'a, DB>(
    chart: &mut XyChart<'a, DB>,
    style: &PlotStyle,
    position: SeriesLabelPosition,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
{
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.95))
        .border_style(&BLACK.mix(0.3))
        .label_font(style.font(style.legend_pt))
        .position(position)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

/// Draws a line series with its markers and registers it in the legend
pub fn draw_series_data<DB>(
    chart: &mut XyChart<'_, DB>,
    series: &SeriesData,
    style: &PlotStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let color = series.color;
    let width = style.px(series.line_width_pt);
    let line_style = color.mix(series.alpha).stroke_width(width);
    let points = series.points.iter().copied();

    let anno = if series.dashed {
        chart.draw_series(DashedLineSeries::new(
            points,
            style.px(DASH_PT),
            style.px(DASH_GAP_PT),
            line_style,
        ))
    } else {
        chart.draw_series(LineSeries::new(points, line_style))
    }
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let legend_len = style.px(20.0) as i32;
    anno.label(series.label.as_str()).legend(move |(x, y)| {
        PathElement::new(vec![(x, y), (x + legend_len, y)], color.stroke_width(width))
    });

    let fill = color.mix(series.alpha).filled();
    let half = (style.px(series.marker_pt) / 2).max(1);
    let markers = match series.marker {
        Marker::Circle => chart.draw_series(
            series
                .points
                .iter()
                .map(|&point| Circle::new(point, half, fill)),
        ),
        Marker::Square => {
            let h = half as i32;
            chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| {
                        EmptyElement::at(point) + Rectangle::new([(-h, -h), (h, h)], fill)
                    }),
            )
        }
    };
    markers.map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws a callout: an arrow from the data point to a filled label box
pub fn draw_annotation<DB: DrawingBackend>(
    chart: &mut XyChart<'_, DB>,
    annotation: &Annotation,
    style: &PlotStyle,
) -> Result<()> {
    let font = style.bold_font(style.annotation_pt);
    let (text_w, text_h) = chart
        .plotting_area()
        .estimate_text_size(&annotation.text, &TextStyle::from(font.clone()))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Backend y grows downwards
    let to_px = |points: f64| (points * style.dpi as f64 / POINTS_PER_INCH).round() as i32;
    let (ox, oy) = (to_px(annotation.offset_pt.0), -to_px(annotation.offset_pt.1));
    let pad = to_px(3.0);
    let (w, h) = (text_w as i32, text_h as i32);

    let color = annotation.color;
    let callout = EmptyElement::at(annotation.point)
        + PathElement::new(vec![(0, 0), (ox, oy)], color.stroke_width(style.px(1.0)))
        + Rectangle::new(
            [(ox - pad, oy - h / 2 - pad), (ox + w + pad, oy + h / 2 + pad)],
            color.mix(0.7).filled(),
        )
        + Text::new(
            annotation.text.clone(),
            (ox, oy),
            font.color(&WHITE).pos(Pos::new(HPos::Left, VPos::Center)),
        );

    chart
        .draw_series(std::iter::once(callout))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Draws a complete [`LineChart`] onto `area` and returns the chart for further overlays
pub fn draw_line_chart<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    chart: &LineChart,
    style: &PlotStyle,
) -> Result<XyChart<'a, DB>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    if chart.series.iter().all(|s| s.points.is_empty()) {
        return Err(PlotError::InvalidData("Data cannot be empty".to_string()));
    }

    let x_range = padded_range(chart.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let y_range = padded_range(chart.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let mut context = build_xy_chart(area, style, &chart.title, x_range, y_range)?;
    draw_mesh(&mut context, style, &chart.x_desc, &chart.y_desc)?;

    for series in &chart.series {
        draw_series_data(&mut context, series, style)?;
    }
    for annotation in &chart.annotations {
        draw_annotation(&mut context, annotation, style)?;
    }

    draw_legend(&mut context, style, SeriesLabelPosition::UpperLeft)?;
    Ok(context)
}

/// Draws bars sharing one colour, outlined in black, as a single legend entry
pub fn draw_bar_group<DB>(
    chart: &mut XyChart<'_, DB>,
    bars: &[Bar],
    color: RGBColor,
    alpha: f64,
    label: &str,
    style: &PlotStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let corners = |bar: &Bar| {
        let (low, high) = if bar.value < 0.0 {
            (bar.value, 0.0)
        } else {
            (0.0, bar.value)
        };
        [(bar.left, high), (bar.right, low)]
    };

    let fill = color.mix(alpha).filled();
    let legend_size = style.px(10.0) as i32;
    chart
        .draw_series(bars.iter().map(|bar| Rectangle::new(corners(bar), fill)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(label)
        .legend(move |(x, y)| {
            Rectangle::new(
                [(x, y - legend_size / 2), (x + legend_size, y + legend_size / 2)],
                fill,
            )
        });

    let edge = BLACK.stroke_width(style.px(1.0));
    chart
        .draw_series(bars.iter().map(|bar| Rectangle::new(corners(bar), edge)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Returns the index of the largest value; ties resolve to the first occurrence
pub fn first_max_index(values: impl IntoIterator<Item = f64>) -> Option<usize> {
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, value)| match best {
            Some((_, max)) if value <= max => best,
            _ => Some((index, value)),
        })
        .map(|(index, _)| index)
}
