//! SVG rendering for header labels and overlay text.

use svg::node::{Text as SvgText, element as svg_element};

use platemap_core::{
    draw::{LayeredOutput, RenderLayer, TextDefinition},
    geometry::Point,
};

use super::{PixelMapper, Svg};
use crate::scene::{Annotation, OverlayLayer, WellMarker};

impl Svg {
    pub(super) fn render_labels(
        &self,
        annotations: &[Annotation],
        mapper: &PixelMapper,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for annotation in annotations {
            let position = mapper.map(annotation.position());
            output.add_to_layer(
                RenderLayer::Labels,
                Box::new(text_element(position, annotation.text(), annotation.style())),
            );
        }
        output
    }

    /// Draws overlay text centered on the markers. Wells without text, or
    /// with empty text, are skipped.
    pub(super) fn render_overlay(
        &self,
        overlay: &OverlayLayer,
        markers: &[WellMarker],
        mapper: &PixelMapper,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for (marker, text) in markers.iter().zip(overlay.texts()) {
            let Some(text) = text.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };
            let position = mapper.map(marker.position());
            output.add_to_layer(
                RenderLayer::Overlay,
                Box::new(text_element(position, text, overlay.style())),
            );
        }
        output
    }
}

/// Builds a single-line `<text>` element at a pixel position.
pub(super) fn text_element(
    position: Point,
    content: &str,
    style: &TextDefinition,
) -> svg_element::Text {
    let mut text = svg_element::Text::new("")
        .set("x", position.x())
        .set("y", position.y())
        .set("text-anchor", style.horizontal_anchor().to_svg_value())
        .set("dominant-baseline", style.vertical_anchor().to_svg_value())
        .set("font-family", style.font_family())
        .set("font-size", style.font_size());

    if let Some(color) = style.color() {
        text = text
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
    }

    text.add(SvgText::new(content))
}

#[cfg(test)]
mod tests {
    use platemap_core::{color::Color, draw::HorizontalAnchor};

    use super::*;

    #[test]
    fn test_text_element_attributes() {
        let mut style = TextDefinition::new();
        style.set_font_size(13.0);
        style.set_horizontal_anchor(HorizontalAnchor::Left);
        style.set_color(Some(Color::new("red").unwrap()));

        let rendered = text_element(Point::new(10.0, 20.0), "A", &style).to_string();
        assert!(rendered.contains(r#"x="10""#));
        assert!(rendered.contains(r#"y="20""#));
        assert!(rendered.contains(r#"text-anchor="start""#));
        assert!(rendered.contains(r#"font-size="13""#));
        assert!(rendered.contains(r#"fill="red""#));
        assert!(rendered.contains(">A<") || rendered.contains("\nA\n"));
    }

    #[test]
    fn test_text_without_color_inherits_fill() {
        let rendered =
            text_element(Point::default(), "12", &TextDefinition::new()).to_string();
        assert!(!rendered.contains("fill="));
        assert!(rendered.contains(r#"text-anchor="middle""#));
    }
}
