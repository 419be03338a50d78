//! The plate layout engine.
//!
//! Turns [`PlateOptions`] into a [`SceneDescription`]: marker positions and
//! style, header labels, frame shapes, optional overlay text and canvas
//! geometry. Positions are in grid units where column `c` (1-based) sits at
//! `x = c + 0.4` and row `r` (0-based) at `y = n_rows - r`, so row `A` is at
//! the top.

mod canvas;
mod frame;
mod labels;
mod markers;

use log::{debug, info, trace};

use platemap_core::{color::Color, colorscale::Colorscale, draw::TextDefinition};

use crate::{
    config::AppConfig,
    data::WellDataArrays,
    error::PlateError,
    options::PlateOptions,
    scene::{OverlayLayer, SceneDescription},
};

/// Horizontal offset of a well center from its column number.
const WELL_X_OFFSET: f32 = 0.4;
/// Overlay text is this much smaller than the header labels by default.
const OVERLAY_FONT_DELTA: f32 = 2.0;

/// Builds a scene with the default configuration.
///
/// # Errors
///
/// Returns [`PlateError::Input`] if `values`, `colors`, overlay texts or
/// override colors are longer than the plate has wells.
///
/// # Examples
///
/// ```
/// # use platemap::{build_scene, PlateOptions};
/// let options = PlateOptions::default().with_values(vec![Some(1.0), None, Some(3.5)]);
/// let scene = build_scene(&options).unwrap();
///
/// let hovers: Vec<&str> = scene.hover_labels().take(3).collect();
/// assert_eq!(hovers, ["A1<br>1.0", "A2", "A3<br>3.5"]);
/// assert_eq!((scene.canvas().width(), scene.canvas().height()), (800, 520));
/// ```
pub fn build_scene(options: &PlateOptions) -> Result<SceneDescription, PlateError> {
    LayoutEngine::new(&AppConfig::default())?.build(options)
}

/// Layout engine bound to a resolved configuration.
#[derive(Debug, Clone)]
pub(crate) struct LayoutEngine {
    cell_size: f64,
    background: Color,
    frame_color: Color,
    border_color: Color,
    colorscale: Colorscale,
    colorbar_title: String,
    font_family: String,
}

impl LayoutEngine {
    /// Resolves the configured colors.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::Config`] if a configured color is not valid CSS.
    pub fn new(config: &AppConfig) -> Result<Self, PlateError> {
        let style = config.style();
        Ok(Self {
            cell_size: config.layout().cell_size(),
            background: style.background_color().map_err(PlateError::Config)?,
            frame_color: style.frame_color().map_err(PlateError::Config)?,
            border_color: style.border_color().map_err(PlateError::Config)?,
            colorscale: style.colorscale(),
            colorbar_title: style.colorbar_title().to_string(),
            font_family: style.font_family().to_string(),
        })
    }

    /// Lays out one plate.
    pub fn build(&self, options: &PlateOptions) -> Result<SceneDescription, PlateError> {
        let shape = options.shape();
        let scale = options.scale();
        info!(shape:% = shape, n_wells = shape.n_wells(), scale; "Building plate scene");

        let data = WellDataArrays::normalize(
            options.values(),
            options.colors(),
            options.overlay_text(),
            shape.n_wells(),
        )?;

        let marker_size = options
            .marker_size()
            .unwrap_or_else(|| markers::default_marker_size(shape) * scale);
        let label_font_size = labels::label_font_size(shape);
        debug!(marker_size, label_font_size; "Derived sizes");

        let marker_style = markers::marker_style(
            &data,
            markers::StyleDefaults {
                size: marker_size,
                showscale: options.showscale(),
                colorscale: self.colorscale,
                colorbar_title: &self.colorbar_title,
            },
            options.marker(),
        )?;

        let overlay = data.has_overlay().then(|| {
            let mut style = TextDefinition::new();
            style.set_font_family(&self.font_family);
            style.set_font_size(
                options
                    .text_size()
                    .unwrap_or_else(|| (label_font_size - OVERLAY_FONT_DELTA).max(0.0)),
            );
            style.set_color(Some(options.text_color()));
            OverlayLayer::new(data.overlay_text().to_vec(), style)
        });

        let scene = SceneDescription {
            shape,
            markers: markers::well_markers(shape, data.values()),
            marker_style,
            annotations: labels::header_labels(shape, scale, label_font_size, &self.font_family),
            shapes: frame::plate_frame(shape, self.frame_color, self.border_color),
            overlay,
            canvas: canvas::plate_canvas(shape, scale, self.cell_size, self.background),
            trace_options: options.trace_options().to_vec(),
        };

        info!(
            width = scene.canvas().width(),
            height = scene.canvas().height(),
            overlay = scene.overlay().is_some();
            "Plate scene built"
        );
        trace!(scene:?; "Built scene");

        Ok(scene)
    }
}
