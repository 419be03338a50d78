//! The renderer-agnostic scene description.
//!
//! A [`SceneDescription`] is plain data: where every well marker goes, how it
//! is styled, where the header labels and frame shapes are, and how large the
//! canvas is. Positions are in grid units (see
//! [`platemap_core::geometry`]); margins and canvas dimensions are in pixels.
//! Renderers such as [`export::svg`](crate::export) consume it without
//! calling back into the engine.

use platemap_core::{
    color::Color,
    colorscale::Colorscale,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Bounds, Insets, Point},
    well::{PlateShape, WellName},
};

use crate::{data::ColorValue, options::TraceOption};

/// Marker glyph for a well.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSymbol {
    #[default]
    Circle,
    Square,
    Diamond,
}

/// One well marker: its name, its center and its hover label.
#[derive(Debug, Clone, PartialEq)]
pub struct WellMarker {
    well: WellName,
    position: Point,
    hover: String,
}

impl WellMarker {
    pub(crate) fn new(well: WellName, position: Point, hover: String) -> Self {
        Self {
            well,
            position,
            hover,
        }
    }

    pub fn well(&self) -> WellName {
        self.well
    }

    /// Marker center in grid units.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Hover label; lines are separated by `<br>`.
    pub fn hover(&self) -> &str {
        &self.hover
    }
}

/// Colorbar legend attached to a numeric colorscale.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar {
    title: String,
}

impl ColorBar {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Styling shared by all well markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub(crate) size: f32,
    pub(crate) symbol: MarkerSymbol,
    pub(crate) colors: Vec<Option<ColorValue>>,
    pub(crate) colorscale: Option<Colorscale>,
    pub(crate) showscale: bool,
    pub(crate) colorbar: Option<ColorBar>,
    pub(crate) line: StrokeDefinition,
    pub(crate) opacity: Option<f32>,
}

impl MarkerStyle {
    /// Marker diameter in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn symbol(&self) -> MarkerSymbol {
        self.symbol
    }

    /// Fill color per well, in well index order. `None` means no fill.
    pub fn colors(&self) -> &[Option<ColorValue>] {
        &self.colors
    }

    /// Colorscale for numeric colors. `None` when literal colors were given.
    pub fn colorscale(&self) -> Option<Colorscale> {
        self.colorscale
    }

    pub fn showscale(&self) -> bool {
        self.showscale
    }

    pub fn colorbar(&self) -> Option<&ColorBar> {
        self.colorbar.as_ref()
    }

    /// Outline stroke.
    pub fn line(&self) -> &StrokeDefinition {
        &self.line
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }
}

/// A text label placed on the canvas (row or column header).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    position: Point,
    text: String,
    style: TextDefinition,
}

impl Annotation {
    pub(crate) fn new(position: Point, text: String, style: TextDefinition) -> Self {
        Self {
            position,
            text,
            style,
        }
    }

    /// Anchor point in grid units.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextDefinition {
        &self.style
    }
}

/// A decorative frame shape, always drawn below the markers.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameShape {
    Rect {
        bounds: Bounds,
        stroke: StrokeDefinition,
    },
    Line {
        start: Point,
        end: Point,
        stroke: StrokeDefinition,
    },
}

impl FrameShape {
    pub fn stroke(&self) -> &StrokeDefinition {
        match self {
            Self::Rect { stroke, .. } | Self::Line { stroke, .. } => stroke,
        }
    }
}

/// Text drawn over the wells, at the marker positions.
///
/// The layer is not interactive: it carries no hover labels and must not
/// capture pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    texts: Vec<Option<String>>,
    style: TextDefinition,
}

impl OverlayLayer {
    pub(crate) fn new(texts: Vec<Option<String>>, style: TextDefinition) -> Self {
        Self { texts, style }
    }

    /// Text per well, in well index order.
    pub fn texts(&self) -> &[Option<String>] {
        &self.texts
    }

    pub fn style(&self) -> &TextDefinition {
        &self.style
    }
}

/// Visible span of one axis, in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min: f32,
    max: f32,
}

impl AxisRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn min(self) -> f32 {
        self.min
    }

    pub fn max(self) -> f32 {
        self.max
    }

    pub fn span(self) -> f32 {
        self.max - self.min
    }
}

/// Output canvas. Axes are a pure drawing surface: no grid lines, tick
/// labels or zero lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    margin: Insets,
    x_range: AxisRange,
    y_range: AxisRange,
    background: Color,
}

impl Canvas {
    pub(crate) fn new(
        width: u32,
        height: u32,
        margin: Insets,
        x_range: AxisRange,
        y_range: AxisRange,
        background: Color,
    ) -> Self {
        Self {
            width,
            height,
            margin,
            x_range,
            y_range,
            background,
        }
    }

    /// Total width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Margins around the plot area, in pixels.
    pub fn margin(&self) -> Insets {
        self.margin
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

/// The complete, renderer-agnostic description of a plate figure.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub(crate) shape: PlateShape,
    pub(crate) markers: Vec<WellMarker>,
    pub(crate) marker_style: MarkerStyle,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) shapes: Vec<FrameShape>,
    pub(crate) overlay: Option<OverlayLayer>,
    pub(crate) canvas: Canvas,
    pub(crate) trace_options: Vec<TraceOption>,
}

impl SceneDescription {
    pub fn shape(&self) -> PlateShape {
        self.shape
    }

    /// One marker per well, in well index order.
    pub fn markers(&self) -> &[WellMarker] {
        &self.markers
    }

    pub fn marker_style(&self) -> &MarkerStyle {
        &self.marker_style
    }

    /// Column headers followed by row headers.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Frame rectangle followed by the outline segments.
    pub fn shapes(&self) -> &[FrameShape] {
        &self.shapes
    }

    pub fn overlay(&self) -> Option<&OverlayLayer> {
        self.overlay.as_ref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn trace_options(&self) -> &[TraceOption] {
        &self.trace_options
    }

    /// Hover labels of all markers, in well index order.
    pub fn hover_labels(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(WellMarker::hover)
    }
}
