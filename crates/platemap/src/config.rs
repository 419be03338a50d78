//! Configuration types for plate figure rendering.
//!
//! This module provides configuration structures that control how plates are
//! laid out and styled. All types implement [`serde::Deserialize`] so they can
//! be loaded from TOML or any other serde format; every field is optional and
//! falls back to the defaults listed below.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Pixel size of a grid cell.
//! - [`StyleConfig`] - Background, frame and colorscale styling.
//!
//! # Example
//!
//! ```
//! # use platemap::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().cell_size(), 60.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use platemap_core::{color::Color, colorscale::Colorscale};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per grid cell at scale 1.0.
    cell_size: f64,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given cell size in pixels.
    pub fn new(cell_size: f64) -> Self {
        Self { cell_size }
    }

    /// Returns the pixel size of one grid cell at scale 1.0.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { cell_size: 60.0 }
    }
}

/// Visual styling configuration.
///
/// Colors are kept as strings and validated when a scene is built, so a bad
/// value surfaces as a [`PlateError::Config`](crate::PlateError::Config)
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    frame_color: String,
    border_color: String,
    colorscale: Colorscale,
    colorbar_title: String,
    font_family: String,
}

impl StyleConfig {
    /// Returns the parsed canvas background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed color of the inner frame rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn frame_color(&self) -> Result<Color, String> {
        Color::new(&self.frame_color).map_err(|err| format!("Invalid frame color in config: {err}"))
    }

    /// Returns the parsed color of the notched plate outline.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn border_color(&self) -> Result<Color, String> {
        Color::new(&self.border_color)
            .map_err(|err| format!("Invalid border color in config: {err}"))
    }

    /// Colorscale used when wells are colored from numeric values.
    pub fn colorscale(&self) -> Colorscale {
        self.colorscale
    }

    /// Title shown above the colorbar.
    pub fn colorbar_title(&self) -> &str {
        &self.colorbar_title
    }

    /// Font family for labels and overlay text.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the style with a different colorscale.
    pub fn with_colorscale(mut self, colorscale: Colorscale) -> Self {
        self.colorscale = colorscale;
        self
    }

    /// Returns the style with a different background color string.
    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            frame_color: "darkgray".to_string(),
            border_color: "black".to_string(),
            colorscale: Colorscale::default(),
            colorbar_title: "Value".to_string(),
            font_family: "sans-serif".to_string(),
        }
    }
}
