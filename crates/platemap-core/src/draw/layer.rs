//! Layer-based rendering for SVG output.
//!
//! Renderers emit nodes into a [`LayeredOutput`] tagged with a
//! [`RenderLayer`]; [`LayeredOutput::render`] then groups them in z-order.
//!
//! # Example
//!
//! ```
//! # use platemap_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Line};
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Markers, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Frame, Box::new(Line::new()));
//!
//! // Frame renders first even though it was added last
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for plate figures.
///
/// Layers are rendered from bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill
    Background,
    /// Decorative plate frame (rectangle and outline), below the wells
    Frame,
    /// Well markers
    Markers,
    /// Row and column header labels
    Labels,
    /// Per-well overlay text, above the markers
    Overlay,
    /// Colorbar legend
    Legend,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Frame => "frame",
            Self::Markers => "markers",
            Self::Labels => "labels",
            Self::Overlay => "overlay",
            Self::Legend => "legend",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes within a layer keep the order in which they were added.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(self) -> Vec<SvgNode> {
        self.render_with(|group, _| group)
    }

    /// Like [`render`](Self::render), but lets the caller decorate each layer
    /// group (e.g. with opacity) before it is emitted.
    pub fn render_with<F>(mut self, mut decorate: F) -> Vec<SvgNode>
    where
        F: FnMut(svg_element::Group, RenderLayer) -> svg_element::Group,
    {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(decorate(current_group, current_layer)) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(decorate(current_group, current_layer)) as SvgNode);

        result
    }
}
