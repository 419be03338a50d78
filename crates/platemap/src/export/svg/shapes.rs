//! SVG rendering for the plate frame and the well markers.

use svg::{Node, node::element as svg_element};

use platemap_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, SvgNode},
    geometry::Point,
};

use super::{PixelMapper, Svg};
use crate::scene::{FrameShape, MarkerSymbol, SceneDescription};

impl Svg {
    pub(super) fn render_frame(&self, shapes: &[FrameShape], mapper: &PixelMapper) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for shape in shapes {
            let node: SvgNode = match shape {
                FrameShape::Rect { bounds, stroke } => {
                    let top_left = mapper.map(Point::new(bounds.min_x(), bounds.max_y()));
                    let bottom_right = mapper.map(Point::new(bounds.max_x(), bounds.min_y()));
                    let rect = svg_element::Rectangle::new()
                        .set("x", top_left.x())
                        .set("y", top_left.y())
                        .set("width", bottom_right.x() - top_left.x())
                        .set("height", bottom_right.y() - top_left.y())
                        .set("fill", "none");
                    Box::new(apply_stroke!(rect, stroke))
                }
                FrameShape::Line { start, end, stroke } => {
                    let start = mapper.map(*start);
                    let end = mapper.map(*end);
                    let line = svg_element::Line::new()
                        .set("x1", start.x())
                        .set("y1", start.y())
                        .set("x2", end.x())
                        .set("y2", end.y());
                    Box::new(apply_stroke!(line, stroke))
                }
            };
            output.add_to_layer(RenderLayer::Frame, node);
        }
        output
    }

    /// Draws one marker per well with its fill and, if enabled, its hover
    /// label as a `<title>` child.
    pub(super) fn render_markers(
        &self,
        scene: &SceneDescription,
        fills: &[String],
        mapper: &PixelMapper,
        hover_labels: bool,
    ) -> LayeredOutput {
        let style = scene.marker_style();
        let half = style.size() / 2.0;
        let stroke = style.line();

        let mut output = LayeredOutput::new();
        for (marker, fill) in scene.markers().iter().zip(fills) {
            let center = mapper.map(marker.position());

            let title = hover_labels.then(|| hover_title(marker.hover()));
            let node = match style.symbol() {
                MarkerSymbol::Circle => {
                    let circle = svg_element::Circle::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", half);
                    finish_marker(apply_stroke!(circle, stroke), fill, style.opacity(), title)
                }
                MarkerSymbol::Square => {
                    let square = svg_element::Rectangle::new()
                        .set("x", center.x() - half)
                        .set("y", center.y() - half)
                        .set("width", style.size())
                        .set("height", style.size());
                    finish_marker(apply_stroke!(square, stroke), fill, style.opacity(), title)
                }
                MarkerSymbol::Diamond => {
                    let (x, y) = (center.x(), center.y());
                    let points = format!(
                        "{x},{} {},{y} {x},{} {},{y}",
                        y - half,
                        x + half,
                        y + half,
                        x - half
                    );
                    let diamond = svg_element::Polygon::new().set("points", points);
                    finish_marker(apply_stroke!(diamond, stroke), fill, style.opacity(), title)
                }
            };

            output.add_to_layer(RenderLayer::Markers, node);
        }
        output
    }
}

fn finish_marker<T: Node + 'static>(
    mut node: T,
    fill: &str,
    opacity: Option<f32>,
    title: Option<svg_element::Element>,
) -> SvgNode {
    node.assign("fill", fill);
    if let Some(opacity) = opacity {
        node.assign("opacity", opacity);
    }
    if let Some(title) = title {
        node.append(title);
    }
    Box::new(node)
}

/// Builds a `<title>` tooltip; `<br>` separators become line breaks.
fn hover_title(hover: &str) -> svg_element::Element {
    let mut title = svg_element::Element::new("title");
    title.append(svg::node::Text::new(hover.replace("<br>", "\n")));
    title
}
