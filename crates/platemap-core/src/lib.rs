//! Platemap Core Types and Definitions
//!
//! This crate provides the foundational types used to lay out and draw
//! microplate figures. It includes:
//!
//! - **Colors**: CSS color handling ([`color::Color`]) and numeric colorscales
//!   ([`colorscale::Colorscale`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke, text and layer definitions used by renderers ([`draw`] module)
//! - **Wells**: Plate shapes and well addressing ([`well`] module)

pub mod color;
pub mod colorscale;
pub mod draw;
pub mod geometry;
pub mod well;
