//! Text style definitions for plate labels and overlay text.
//!
//! A [`TextDefinition`] carries font size, family, color and anchoring. The
//! layout engine attaches one to each group of annotations; renderers map it
//! onto their own text primitives (SVG `<text>` attributes for the built-in
//! exporter).

use crate::color::Color;

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    /// Text starts at the anchor point
    Left,
    /// Text is centered on the anchor point (default)
    #[default]
    Center,
    /// Text ends at the anchor point
    Right,
}

impl HorizontalAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Vertical alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Text hangs below the anchor point
    Top,
    /// Text is centered on the anchor point (default)
    #[default]
    Middle,
    /// Text sits on top of the anchor point
    Bottom,
}

impl VerticalAnchor {
    /// Returns the SVG `dominant-baseline` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Top => "hanging",
            Self::Middle => "central",
            Self::Bottom => "text-after-edge",
        }
    }
}

/// Defines the visual style for text elements on a plate.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Text color | `None` (renderer default, typically black) |
/// | Anchors | centered on both axes |
///
/// # Examples
///
/// ```
/// # use platemap_core::draw::{HorizontalAnchor, TextDefinition};
/// # use platemap_core::color::Color;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut style = TextDefinition::new();
/// style.set_font_size(14.0);
/// style.set_color(Some(Color::new("navy")?));
/// style.set_horizontal_anchor(HorizontalAnchor::Left);
/// assert_eq!(style.font_size(), 14.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    color: Option<Color>,
    horizontal_anchor: HorizontalAnchor,
    vertical_anchor: VerticalAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` leaves the color to the renderer.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal alignment.
    pub fn set_horizontal_anchor(&mut self, anchor: HorizontalAnchor) {
        self.horizontal_anchor = anchor;
    }

    /// Sets the vertical alignment.
    pub fn set_vertical_anchor(&mut self, anchor: VerticalAnchor) {
        self.vertical_anchor = anchor;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns a reference to the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    pub fn horizontal_anchor(&self) -> HorizontalAnchor {
        self.horizontal_anchor
    }

    pub fn vertical_anchor(&self) -> VerticalAnchor {
        self.vertical_anchor
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            color: None,
            horizontal_anchor: HorizontalAnchor::default(),
            vertical_anchor: VerticalAnchor::default(),
        }
    }
}
