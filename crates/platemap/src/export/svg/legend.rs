//! SVG rendering for the colorbar legend.

use svg::node::element as svg_element;

use platemap_core::{
    colorscale::Colorscale,
    draw::{HorizontalAnchor, LayeredOutput, RenderLayer, TextDefinition, VerticalAnchor},
    geometry::Point,
};

use super::{Svg, text::text_element};
use crate::{
    data::format_value,
    scene::{Canvas, ColorBar},
};

const GRADIENT_ID: &str = "colorbar-gradient";
const BAR_GAP: f32 = 20.0;
const BAR_WIDTH: f32 = 16.0;
const TITLE_SPACE: f32 = 24.0;
const TICK_GAP: f32 = 6.0;
const FONT_SIZE: f32 = 12.0;

impl Svg {
    /// Draws a vertical colorbar to the right of the canvas, low values at
    /// the bottom.
    ///
    /// Returns the gradient definition and the legend nodes.
    pub(super) fn render_colorbar(
        &self,
        colorbar: &ColorBar,
        colorscale: Colorscale,
        (min, max): (f64, f64),
        canvas: &Canvas,
        x_offset: f32,
    ) -> (svg_element::Definitions, LayeredOutput) {
        let margin = canvas.margin();
        let x = x_offset + BAR_GAP;
        let bar_top = margin.top() + TITLE_SPACE;
        let bar_bottom = canvas.height() as f32 - margin.bottom();
        let bar_height = (bar_bottom - bar_top).max(0.0);

        let mut gradient = svg_element::LinearGradient::new()
            .set("id", GRADIENT_ID)
            .set("x1", 0)
            .set("y1", 1)
            .set("x2", 0)
            .set("y2", 0);
        for (offset, color) in colorscale.css_stops() {
            gradient = gradient.add(
                svg_element::Stop::new()
                    .set("offset", offset)
                    .set("stop-color", color),
            );
        }
        let defs = svg_element::Definitions::new().add(gradient);

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Legend,
            Box::new(
                svg_element::Rectangle::new()
                    .set("x", x)
                    .set("y", bar_top)
                    .set("width", BAR_WIDTH)
                    .set("height", bar_height)
                    .set("fill", format!("url(#{GRADIENT_ID})")),
            ),
        );

        let mut title_style = self.legend_text_style();
        title_style.set_vertical_anchor(VerticalAnchor::Bottom);
        output.add_to_layer(
            RenderLayer::Legend,
            Box::new(text_element(
                Point::new(x, bar_top - TICK_GAP),
                colorbar.title(),
                &title_style,
            )),
        );

        let tick_style = self.legend_text_style();
        let tick_x = x + BAR_WIDTH + TICK_GAP;
        for (y, value) in [(bar_top, max), (bar_bottom, min)] {
            output.add_to_layer(
                RenderLayer::Legend,
                Box::new(text_element(
                    Point::new(tick_x, y),
                    &format_value(value),
                    &tick_style,
                )),
            );
        }

        (defs, output)
    }

    fn legend_text_style(&self) -> TextDefinition {
        let mut style = TextDefinition::new();
        style.set_font_family(&self.font_family);
        style.set_font_size(FONT_SIZE);
        style.set_horizontal_anchor(HorizontalAnchor::Left);
        style
    }
}
