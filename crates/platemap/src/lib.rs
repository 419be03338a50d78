//! Platemap - Layout and rendering for microplate figures.
//!
//! A microplate is a grid of wells (96-well plates are 8 rows by 12
//! columns). This crate lays out a plate figure from per-well values, colors
//! and overlay text, producing a renderer-agnostic [`SceneDescription`], and
//! renders that scene to SVG.
//!
//! # Examples
//!
//! ```
//! use platemap::{PlateBuilder, PlateOptions, well::PlateShape};
//!
//! let options = PlateOptions::new(PlateShape::default())
//!     .with_values(vec![Some(1.0), None, Some(3.5)])
//!     .with_showscale(true);
//!
//! let builder = PlateBuilder::default();
//! let scene = builder.build_scene(&options).expect("valid options");
//! assert_eq!(scene.markers().len(), 96);
//!
//! let svg = builder.render_svg(&options).expect("renderable scene");
//! assert!(svg.contains("<svg"));
//! ```

pub mod adapter;
pub mod config;
pub mod export;
pub mod scene;

mod data;
mod error;
mod layout;
mod options;

pub use platemap_core::{color, colorscale, draw, geometry, well};

pub use data::{ColorValue, OverlayText, WellDataArrays, format_value, pad_or_check};
pub use error::PlateError;
pub use layout::build_scene;
pub use options::{MarkerOverrides, PlateOptions, TraceOption};
pub use scene::{MarkerSymbol, SceneDescription};

use log::info;

use config::AppConfig;
use export::Exporter;

/// Builder for laying out and rendering plate figures with a given
/// configuration.
///
/// [`build_scene`] is equivalent to a builder with the default
/// configuration.
///
/// # Examples
///
/// ```
/// use platemap::{PlateBuilder, PlateOptions, config::AppConfig};
///
/// let builder = PlateBuilder::new(AppConfig::default());
/// let svg = builder.render_svg(&PlateOptions::default()).unwrap();
/// assert!(svg.contains("<title>"));
/// ```
#[derive(Debug, Default)]
pub struct PlateBuilder {
    config: AppConfig,
}

impl PlateBuilder {
    /// Create a new plate builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Lay out a plate figure.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::Config`] if a configured color is invalid, and
    /// [`PlateError::Input`] if a per-well sequence is longer than the plate.
    pub fn build_scene(&self, options: &PlateOptions) -> Result<SceneDescription, PlateError> {
        layout::LayoutEngine::new(&self.config)?.build(options)
    }

    /// Lay out a plate figure and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`build_scene`](Self::build_scene), and
    /// [`PlateError::Export`] if the scene cannot be drawn.
    pub fn render_svg(&self, options: &PlateOptions) -> Result<String, PlateError> {
        let scene = self.build_scene(options)?;

        let exporter = export::svg::Svg::new().with_style(self.config.style());
        let svg = exporter.export_scene(&scene)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }
}
