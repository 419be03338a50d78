//! Drawing definitions shared by plate renderers.
//!
//! The layout engine describes *what* to draw using the definitions in this
//! module; renderers decide *how*. [`LayeredOutput`] collects SVG nodes by
//! [`RenderLayer`] so that frame shapes always sit below well markers and
//! overlay text always sits above them.
mod layer;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{HorizontalAnchor, TextDefinition, VerticalAnchor};
