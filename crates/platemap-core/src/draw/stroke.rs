//! Stroke definitions for well outlines and plate frames.
//!
//! - [`StrokeDefinition`]: color, width and line cap of a stroke
//! - [`StrokeCap`]: how line endpoints are rendered
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # Example
//!
//! ```
//! use platemap_core::draw::{StrokeCap, StrokeDefinition};
//! use platemap_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::new(Color::new("black").unwrap(), 4.0);
//! stroke.set_cap(StrokeCap::Square);
//!
//! let line = svg_element::Line::new()
//!     .set("x1", 0)
//!     .set("y1", 0)
//!     .set("x2", 10)
//!     .set("y2", 0);
//! let line = platemap_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// A stroke definition for well outlines and frame lines.
///
/// Widths are in pixels and are not affected by the figure scale.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width and a butt cap.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Returns the stroke with a different cap style.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            cap: StrokeCap::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width and line cap.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(stroke.cap(), StrokeCap::Butt);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();

        stroke.set_color(Color::new("darkgray").unwrap());
        stroke.set_width(2.0);
        stroke.set_cap(StrokeCap::Square);

        assert_eq!(stroke.color(), Color::new("darkgray").unwrap());
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.cap(), StrokeCap::Square);
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 4.0)
            .with_cap(StrokeCap::Square);
        let line = crate::apply_stroke!(svg::node::element::Line::new(), &stroke);
        let rendered = line.to_string();

        assert!(rendered.contains("stroke-width=\"4\""));
        assert!(rendered.contains("stroke-linecap=\"square\""));
    }
}
