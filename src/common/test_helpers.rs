//! Row builders and a recording drawing surface shared by unit tests

use super::data_structures::{CostMatch, ResultRow};
use core::convert::Infallible;
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Builds a row with the given timings; remaining metrics are derived from `vertices`
pub fn row(
    vertices: u32,
    prim_time_ms: f64,
    kruskal_time_ms: f64,
    cost_match: CostMatch,
) -> ResultRow {
    ResultRow {
        graph_id: None,
        vertices,
        edges: u64::from(vertices) * 2,
        prim_time_ms,
        kruskal_time_ms,
        prim_operations: u64::from(vertices) * 100,
        kruskal_operations: u64::from(vertices) * 150,
        prim_cost: f64::from(vertices) * 3.0,
        kruskal_cost: f64::from(vertices) * 3.0,
        cost_match,
    }
}

/// A small and a large graph whose time differences have opposite signs
pub fn example_rows() -> Vec<ResultRow> {
    vec![
        row(10, 1.0, 1.5, CostMatch::Yes),
        row(500, 5.0, 4.0, CostMatch::Yes),
    ]
}

/// Everything drawn onto a [`RecordingBackend`]
#[derive(Debug, Default)]
pub struct Recording {
    /// Text and its colour, in drawing order
    pub texts: Vec<(String, (u8, u8, u8))>,
    /// Rectangle corners, colour and whether it was filled
    pub rects: Vec<((i32, i32), (i32, i32), (u8, u8, u8), bool)>,
    /// Circle centre, radius and colour
    pub circles: Vec<((i32, i32), u32, (u8, u8, u8))>,
    /// Path points, colour and stroke width
    pub paths: Vec<(Vec<(i32, i32)>, (u8, u8, u8), u32)>,
}

impl Recording {
    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|(t, _)| t == text)
    }

    pub fn text_color(&self, text: &str) -> Option<(u8, u8, u8)> {
        self.texts.iter().find(|(t, _)| t == text).map(|(_, c)| *c)
    }

    pub fn filled_rects_with_color(&self, rgb: (u8, u8, u8)) -> usize {
        self.rects
            .iter()
            .filter(|(_, _, color, filled)| *filled && *color == rgb)
            .count()
    }

    pub fn circles_with_color(&self, rgb: (u8, u8, u8)) -> usize {
        self.circles.iter().filter(|(_, _, color)| *color == rgb).count()
    }
}

/// Drawing surface that records primitives instead of rasterising them
///
/// Text sizes are estimated from the character count, so charts can be laid out
/// without any fonts installed.
pub struct RecordingBackend {
    size: (u32, u32),
    recording: Rc<RefCell<Recording>>,
}

impl RecordingBackend {
    pub fn new(size: (u32, u32)) -> (Self, Rc<RefCell<Recording>>) {
        let recording = Rc::new(RefCell::new(Recording::default()));
        let backend = Self {
            size,
            recording: Rc::clone(&recording),
        };
        (backend, recording)
    }
}

type DrawResult<T> = Result<T, DrawingErrorKind<Infallible>>;

impl DrawingBackend for RecordingBackend {
    type ErrorType = Infallible;

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn ensure_prepared(&mut self) -> DrawResult<()> {
        Ok(())
    }

    fn present(&mut self) -> DrawResult<()> {
        Ok(())
    }

    fn draw_pixel(&mut self, _point: BackendCoord, _color: BackendColor) -> DrawResult<()> {
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        _from: BackendCoord,
        _to: BackendCoord,
        _style: &S,
    ) -> DrawResult<()> {
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> DrawResult<()> {
        self.recording
            .borrow_mut()
            .rects
            .push((upper_left, bottom_right, style.color().rgb, fill));
        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> DrawResult<()> {
        self.recording.borrow_mut().paths.push((
            path.into_iter().collect(),
            style.color().rgb,
            style.stroke_width(),
        ));
        Ok(())
    }

    fn draw_circle<S: BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        _fill: bool,
    ) -> DrawResult<()> {
        self.recording
            .borrow_mut()
            .circles
            .push((center, radius, style.color().rgb));
        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        _vert: I,
        _style: &S,
    ) -> DrawResult<()> {
        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        _pos: BackendCoord,
    ) -> DrawResult<()> {
        self.recording
            .borrow_mut()
            .texts
            .push((text.to_string(), style.color().rgb));
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> DrawResult<(u32, u32)> {
        let size = style.size();
        let width = text.chars().count() as f64 * size * 0.6;
        Ok((width.ceil() as u32, size.ceil() as u32))
    }
}

/// Converts a palette colour into the tuple recorded by [`RecordingBackend`]
pub fn rgb(color: plotters::style::RGBColor) -> (u8, u8, u8) {
    (color.0, color.1, color.2)
}
