//! SVG rendering for plate scenes.
//!
//! [`Svg`] maps the grid units of a [`SceneDescription`] onto pixels through
//! the canvas margins and axis ranges (y pointing up), draws each part of the
//! scene into its [`RenderLayer`] and serializes the result as a standalone
//! SVG document.
//!
//! Hover labels become `<title>` children of the markers, which browsers show
//! as tooltips.

mod legend;
mod shapes;
mod text;

use log::{debug, info};
use svg::node::element as svg_element;

use platemap_core::{
    colorscale::Colorscale,
    draw::{LayeredOutput, RenderLayer},
    geometry::Point,
};

use crate::{
    config::StyleConfig,
    data::ColorValue,
    export::{self, Exporter},
    options::TraceOption,
    scene::{AxisRange, Canvas, MarkerStyle, SceneDescription},
};

/// Horizontal space added to the right of the canvas for the colorbar.
const LEGEND_SPACE: f32 = 90.0;

/// SVG exporter.
///
/// The style supplies the colorscale used for numeric colors that carry no
/// colorscale of their own and the font of the colorbar.
#[derive(Debug, Clone)]
pub struct Svg {
    fallback_colorscale: Colorscale,
    font_family: String,
}

impl Svg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the colorscale and font family from a style configuration.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.fallback_colorscale = style.colorscale();
        self.font_family = style.font_family().to_string();
        self
    }

    /// Renders the scene into an SVG document.
    pub fn render_document(&self, scene: &SceneDescription) -> Result<svg::Document, export::Error> {
        let canvas = scene.canvas();
        let mapper = PixelMapper::new(canvas)?;
        let settings = TraceSettings::from_options(scene.trace_options());

        let fills = resolve_fills(scene.marker_style(), self.fallback_colorscale);
        let legend = scene.marker_style().colorbar().zip(fills.colorscale);

        let mut width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(self.render_background(
                canvas,
                width + legend.map_or(0.0, |_| LEGEND_SPACE),
                height,
            )),
        );
        output.merge(self.render_frame(scene.shapes(), &mapper));
        if settings.visible {
            output.merge(self.render_markers(scene, &fills.colors, &mapper, settings.hover_labels));
        } else {
            debug!("Marker layer hidden");
        }
        output.merge(self.render_labels(scene.annotations(), &mapper));
        if let Some(overlay) = scene.overlay() {
            output.merge(self.render_overlay(overlay, scene.markers(), &mapper));
        }

        let mut doc = svg::Document::new();
        if let Some((colorbar, colorscale)) = legend {
            let range = fills.range.unwrap_or_default();
            let (defs, nodes) = self.render_colorbar(colorbar, colorscale, range, canvas, width);
            doc = doc.add(defs);
            output.merge(nodes);
            width += LEGEND_SPACE;
        }

        doc = doc
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        let layers = output.render_with(|group, layer| match layer {
            RenderLayer::Markers => settings.decorate_markers(group),
            RenderLayer::Overlay => group.set("pointer-events", "none"),
            _ => group,
        });
        for node in layers {
            doc = doc.add(node);
        }

        Ok(doc)
    }

    fn render_background(&self, canvas: &Canvas, width: f32, height: f32) -> svg_element::Rectangle {
        let background = canvas.background();
        svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", background.to_string())
            .set("fill-opacity", background.alpha())
    }
}

impl Default for Svg {
    fn default() -> Self {
        Self {
            fallback_colorscale: Colorscale::default(),
            font_family: "sans-serif".to_string(),
        }
    }
}

impl Exporter for Svg {
    fn export_scene(&self, scene: &SceneDescription) -> Result<String, export::Error> {
        info!(shape:% = scene.shape(); "Rendering plate SVG");
        let doc = self.render_document(scene)?;
        debug!("SVG document rendered");
        Ok(doc.to_string())
    }
}

/// Maps grid units onto pixel coordinates.
#[derive(Debug, Clone, Copy)]
struct PixelMapper {
    left: f32,
    top: f32,
    plot_width: f32,
    plot_height: f32,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl PixelMapper {
    fn new(canvas: &Canvas) -> Result<Self, export::Error> {
        let margin = canvas.margin();
        let plot_width = canvas.width() as f32 - margin.horizontal_sum();
        let plot_height = canvas.height() as f32 - margin.vertical_sum();

        if !(plot_width > 0.0 && plot_height > 0.0) {
            return Err(export::Error::Render(format!(
                "canvas {}x{} leaves no room for the plot inside its margins",
                canvas.width(),
                canvas.height()
            )));
        }
        if !(canvas.x_range().span() > 0.0 && canvas.y_range().span() > 0.0) {
            return Err(export::Error::Render(
                "axis ranges must have a positive span".to_string(),
            ));
        }

        Ok(Self {
            left: margin.left(),
            top: margin.top(),
            plot_width,
            plot_height,
            x_range: canvas.x_range(),
            y_range: canvas.y_range(),
        })
    }

    fn map(&self, point: Point) -> Point {
        let x = self.left + (point.x() - self.x_range.min()) / self.x_range.span() * self.plot_width;
        let y =
            self.top + (self.y_range.max() - point.y()) / self.y_range.span() * self.plot_height;
        Point::new(x, y)
    }
}

/// Renderer options collected from the scene. Later options win.
#[derive(Debug, Clone)]
struct TraceSettings {
    name: Option<String>,
    opacity: Option<f32>,
    visible: bool,
    hover_labels: bool,
}

impl TraceSettings {
    fn from_options(options: &[TraceOption]) -> Self {
        let mut settings = Self {
            name: None,
            opacity: None,
            visible: true,
            hover_labels: true,
        };
        for option in options {
            match option {
                TraceOption::Name(name) => settings.name = Some(name.clone()),
                TraceOption::Opacity(opacity) => settings.opacity = Some(*opacity),
                TraceOption::Visible(visible) => settings.visible = *visible,
                TraceOption::HoverLabels(hover) => settings.hover_labels = *hover,
            }
        }
        settings
    }

    fn decorate_markers(&self, mut group: svg_element::Group) -> svg_element::Group {
        if let Some(name) = &self.name {
            group = group.set("data-name", name.as_str());
        }
        if let Some(opacity) = self.opacity {
            group = group.set("opacity", opacity);
        }
        group
    }
}

/// Marker fills ready for SVG.
#[derive(Debug, Clone, PartialEq)]
struct Fills {
    colors: Vec<String>,
    /// Scale used for numeric colors, if any were present.
    colorscale: Option<Colorscale>,
    /// Minimum and maximum of the finite numeric colors.
    range: Option<(f64, f64)>,
}

/// Turns marker colors into CSS fills.
///
/// Literal colors are written verbatim; numbers are sampled from the
/// colorscale between the numeric minimum and maximum; missing colors are
/// left unfilled.
fn resolve_fills(style: &MarkerStyle, fallback: Colorscale) -> Fills {
    let range = style
        .colors()
        .iter()
        .filter_map(|c| c.as_ref().and_then(ColorValue::as_number))
        .filter(|n| n.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, n| match acc {
            Some((min, max)) => Some((min.min(n), max.max(n))),
            None => Some((n, n)),
        });

    let colorscale = style.colorscale().unwrap_or(fallback);
    let colors = style
        .colors()
        .iter()
        .map(|color| match color {
            Some(ColorValue::Literal(css)) => css.clone(),
            Some(ColorValue::Number(n)) => {
                let (min, max) = range.unwrap_or((*n, *n));
                colorscale.sample_range(*n, min, max)
            }
            None => "none".to_string(),
        })
        .collect();

    Fills {
        colors,
        colorscale: range.map(|_| colorscale).or(style.colorscale()),
        range,
    }
}
