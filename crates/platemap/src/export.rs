//! Export functionality for plate scenes.
//!
//! This module provides the [`Exporter`] trait that turns a
//! [`SceneDescription`] into an output format. It is the last stage of the
//! pipeline:
//!
//! ```text
//! PlateOptions
//!     ↓ build_scene
//! SceneDescription
//!     ↓ export (this module)
//! Output document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: standalone SVG via [`svg::Svg`]
//!
//! [`Error`] converts into [`PlateError::Export`](crate::PlateError::Export)
//! at the crate boundary.

/// SVG export backend.
pub mod svg;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// Renders a scene to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be drawn, for example
    /// because its canvas has no drawable area.
    fn export_scene(&self, scene: &SceneDescription) -> Result<String, Error>;
}

/// Errors that can occur while exporting a scene.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering failure described by the message.
    #[error("Render error: {0}")]
    Render(String),
}
