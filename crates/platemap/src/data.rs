//! Per-well data normalization.
//!
//! Callers hand the engine up to three parallel sequences indexed by well:
//! values, colors and overlay text. Each may be shorter than the plate (it is
//! right-padded with nulls) but never longer. [`WellDataArrays`] holds the
//! three sequences after padding and after the color and overlay rules have
//! been applied, so every array has exactly `n_wells` entries.

use std::fmt;

use log::debug;
use serde::Deserialize;

use platemap_core::color::TRANSPARENT;

use crate::error::PlateError;

/// A single well's fill color as given by the caller.
///
/// Literal strings are passed to the renderer verbatim; numbers are mapped
/// onto a colorscale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Number(f64),
    Literal(String),
}

impl ColorValue {
    /// Returns the number, if this is a numeric color.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Literal(_) => None,
        }
    }

    /// Returns the CSS string, if this is a literal color.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Literal(s) => Some(s),
        }
    }
}

impl From<f64> for ColorValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_value(*n)),
            Self::Literal(s) => f.write_str(s),
        }
    }
}

/// Overlay text drawn on top of each well.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayText {
    /// Show each well's own value as its overlay text.
    Values,
    /// Explicit per-well text, in well index order.
    Texts(Vec<Option<String>>),
}

impl<S: Into<String>> FromIterator<Option<S>> for OverlayText {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self::Texts(iter.into_iter().map(|t| t.map(Into::into)).collect())
    }
}

/// Formats a well value for hover labels and overlay text.
///
/// Integral values keep one decimal place (`1.0`, `5.0`) so that a value of
/// one reads the same whether it was measured or counted; other values use
/// the shortest round-tripping representation.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Right-pads `data` with nulls to `n_wells` entries.
///
/// # Errors
///
/// Returns [`PlateError::Input`] if `data` is longer than `n_wells`.
pub fn pad_or_check<T: Clone>(
    field: &'static str,
    data: Option<&[Option<T>]>,
    n_wells: usize,
) -> Result<Vec<Option<T>>, PlateError> {
    let Some(data) = data else {
        return Ok(vec![None; n_wells]);
    };
    if data.len() > n_wells {
        return Err(PlateError::new_input_error(field, data.len(), n_wells));
    }

    let mut padded = Vec::with_capacity(n_wells);
    padded.extend_from_slice(data);
    padded.resize(n_wells, None);
    Ok(padded)
}

/// Per-well values, colors and overlay text, each exactly `n_wells` long.
#[derive(Debug, Clone, PartialEq)]
pub struct WellDataArrays {
    values: Vec<Option<f64>>,
    colors: Vec<Option<ColorValue>>,
    overlay_text: Vec<Option<String>>,
    custom_colors: bool,
    has_overlay: bool,
}

impl WellDataArrays {
    /// Pads the caller's sequences and applies the color and overlay rules.
    ///
    /// - Without `colors`, each well is colored by its value, with `0` for
    ///   wells that have no value.
    /// - With `colors` made only of literal strings and nulls, nulls become
    ///   fully transparent. Arrays that mix numbers and strings are kept as
    ///   given.
    /// - [`OverlayText::Values`] turns each value into text, `""` for nulls.
    ///
    /// # Errors
    ///
    /// Returns [`PlateError::Input`] if any sequence is longer than `n_wells`.
    pub fn normalize(
        values: Option<&[Option<f64>]>,
        colors: Option<&[Option<ColorValue>]>,
        overlay_text: Option<&OverlayText>,
        n_wells: usize,
    ) -> Result<Self, PlateError> {
        let values = pad_or_check("values", values, n_wells)?;

        let overlay_text = match overlay_text {
            Some(OverlayText::Values) => values
                .iter()
                .map(|v| Some(v.map(format_value).unwrap_or_default()))
                .collect(),
            Some(OverlayText::Texts(texts)) => {
                pad_or_check("overlay_text", Some(texts.as_slice()), n_wells)?
            }
            None => vec![None; n_wells],
        };
        let has_overlay = overlay_text.iter().any(Option::is_some);

        let custom_colors = colors.is_some();
        let colors = match colors {
            Some(colors) => {
                let colors = pad_or_check("colors", Some(colors), n_wells)?;
                let all_literal = colors
                    .iter()
                    .all(|c| !matches!(c, Some(ColorValue::Number(_))));
                if all_literal {
                    colors
                        .into_iter()
                        .map(|c| c.or_else(|| Some(ColorValue::from(TRANSPARENT))))
                        .collect()
                } else {
                    debug!("Mixed numeric and literal colors, passing through unchanged");
                    colors
                }
            }
            None => values
                .iter()
                .map(|v| Some(ColorValue::Number(v.unwrap_or(0.0))))
                .collect(),
        };

        Ok(Self {
            values,
            colors,
            overlay_text,
            custom_colors,
            has_overlay,
        })
    }

    /// Number of wells covered by the arrays.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the plate has no wells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Resolved fill colors.
    pub fn colors(&self) -> &[Option<ColorValue>] {
        &self.colors
    }

    /// Resolved overlay text.
    pub fn overlay_text(&self) -> &[Option<String>] {
        &self.overlay_text
    }

    /// `true` if the caller supplied colors rather than having them derived
    /// from values.
    pub fn has_custom_colors(&self) -> bool {
        self.custom_colors
    }

    /// `true` if at least one well has overlay text.
    pub fn has_overlay(&self) -> bool {
        self.has_overlay
    }
}
