//! Inputs to the layout engine.
//!
//! [`PlateOptions`] gathers everything [`build_scene`](crate::build_scene)
//! needs: the plate shape, the per-well data and the styling knobs. It is
//! built fluently:
//!
//! ```
//! # use platemap::{OverlayText, PlateOptions};
//! # use platemap::well::PlateShape;
//! let options = PlateOptions::new(PlateShape::default())
//!     .with_values(vec![Some(1.0), None, Some(3.5)])
//!     .with_overlay_text(OverlayText::Values)
//!     .with_scale(1.5)
//!     .with_showscale(true);
//! assert_eq!(options.scale(), 1.5);
//! ```

use platemap_core::{color::Color, colorscale::Colorscale, well::PlateShape};

use crate::{
    data::{ColorValue, OverlayText},
    scene::MarkerSymbol,
};

/// Renderer options passed through to the scene verbatim.
///
/// The engine does not interpret these; they tune how the renderer presents
/// the well markers.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOption {
    /// A name for the marker layer (e.g. for legends or element ids).
    Name(String),
    /// Opacity of the marker layer, `0.0..=1.0`.
    Opacity(f32),
    /// Whether the marker layer is drawn at all.
    Visible(bool),
    /// Whether markers carry hover labels.
    HoverLabels(bool),
}

/// Caller overrides for the marker style.
///
/// Every field left as `None` keeps the default the engine computes; every
/// field that is set replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerOverrides {
    size: Option<f32>,
    symbol: Option<MarkerSymbol>,
    colors: Option<Vec<Option<ColorValue>>>,
    colorscale: Option<Colorscale>,
    showscale: Option<bool>,
    line_color: Option<Color>,
    line_width: Option<f32>,
    opacity: Option<f32>,
}

impl MarkerOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker diameter in pixels.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_symbol(mut self, symbol: MarkerSymbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    /// Per-well colors used verbatim, bypassing the color rules.
    pub fn with_colors(mut self, colors: Vec<Option<ColorValue>>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_colorscale(mut self, colorscale: Colorscale) -> Self {
        self.colorscale = Some(colorscale);
        self
    }

    pub fn with_showscale(mut self, showscale: bool) -> Self {
        self.showscale = Some(showscale);
        self
    }

    /// Outline color.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    /// Outline width in pixels.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn size(&self) -> Option<f32> {
        self.size
    }

    pub fn symbol(&self) -> Option<MarkerSymbol> {
        self.symbol
    }

    pub fn colors(&self) -> Option<&[Option<ColorValue>]> {
        self.colors.as_deref()
    }

    pub fn colorscale(&self) -> Option<Colorscale> {
        self.colorscale
    }

    pub fn showscale(&self) -> Option<bool> {
        self.showscale
    }

    pub fn line_color(&self) -> Option<Color> {
        self.line_color
    }

    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }
}

/// Everything the layout engine needs to build a scene.
///
/// # Defaults
///
/// | Option | Default |
/// |--------|---------|
/// | values, colors, overlay text | none |
/// | scale | `1.0` |
/// | marker size | `min(60, 500 / max(n_rows, n_columns))`, times scale |
/// | showscale | `false` |
/// | text size | label font size minus 2 |
/// | text color | black |
#[derive(Debug, Clone)]
pub struct PlateOptions {
    shape: PlateShape,
    values: Option<Vec<Option<f64>>>,
    colors: Option<Vec<Option<ColorValue>>>,
    overlay_text: Option<OverlayText>,
    scale: f32,
    marker_size: Option<f32>,
    showscale: bool,
    text_size: Option<f32>,
    text_color: Color,
    marker: Option<MarkerOverrides>,
    trace_options: Vec<TraceOption>,
}

impl PlateOptions {
    /// Creates options for an empty plate of the given shape.
    pub fn new(shape: PlateShape) -> Self {
        Self {
            shape,
            values: None,
            colors: None,
            overlay_text: None,
            scale: 1.0,
            marker_size: None,
            showscale: false,
            text_size: None,
            text_color: Color::default(),
            marker: None,
            trace_options: Vec::new(),
        }
    }

    /// Per-well numeric values in well index order.
    pub fn with_values(mut self, values: Vec<Option<f64>>) -> Self {
        self.values = Some(values);
        self
    }

    /// Per-well fill colors in well index order.
    pub fn with_colors(mut self, colors: Vec<Option<ColorValue>>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Text drawn on top of each well.
    pub fn with_overlay_text(mut self, overlay_text: OverlayText) -> Self {
        self.overlay_text = Some(overlay_text);
        self
    }

    /// Uniform multiplier for default marker size, margins, label padding
    /// and canvas size.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Explicit marker diameter in pixels.
    pub fn with_marker_size(mut self, size: f32) -> Self {
        self.marker_size = Some(size);
        self
    }

    /// Attach a colorbar when wells are colored from their values.
    pub fn with_showscale(mut self, showscale: bool) -> Self {
        self.showscale = showscale;
        self
    }

    /// Font size of the overlay text in pixels.
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_marker(mut self, marker: MarkerOverrides) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Adds a renderer option.
    pub fn with_trace_option(mut self, option: TraceOption) -> Self {
        self.trace_options.push(option);
        self
    }

    pub fn shape(&self) -> PlateShape {
        self.shape
    }

    pub fn values(&self) -> Option<&[Option<f64>]> {
        self.values.as_deref()
    }

    pub fn colors(&self) -> Option<&[Option<ColorValue>]> {
        self.colors.as_deref()
    }

    pub fn overlay_text(&self) -> Option<&OverlayText> {
        self.overlay_text.as_ref()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn marker_size(&self) -> Option<f32> {
        self.marker_size
    }

    pub fn showscale(&self) -> bool {
        self.showscale
    }

    pub fn text_size(&self) -> Option<f32> {
        self.text_size
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn marker(&self) -> Option<&MarkerOverrides> {
        self.marker.as_ref()
    }

    pub fn trace_options(&self) -> &[TraceOption] {
        &self.trace_options
    }
}

impl Default for PlateOptions {
    fn default() -> Self {
        Self::new(PlateShape::default())
    }
}
