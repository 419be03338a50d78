//! Well markers and their shared style.

use platemap_core::{
    color::Color,
    colorscale::Colorscale,
    draw::StrokeDefinition,
    geometry::Point,
    well::PlateShape,
};

use super::WELL_X_OFFSET;
use crate::{
    data::{WellDataArrays, format_value, pad_or_check},
    error::PlateError,
    options::MarkerOverrides,
    scene::{ColorBar, MarkerStyle, MarkerSymbol, WellMarker},
};

const MAX_MARKER_SIZE: usize = 60;
const MARKER_BUDGET: usize = 500;
const OUTLINE_WIDTH: f32 = 1.0;

/// Marker diameter at scale 1: `min(60, 500 / max(n_rows, n_columns))`.
pub(super) fn default_marker_size(shape: PlateShape) -> f32 {
    MAX_MARKER_SIZE.min(MARKER_BUDGET / shape.max_dimension()) as f32
}

/// Places one marker per well, row `A` at the top.
pub(super) fn well_markers(shape: PlateShape, values: &[Option<f64>]) -> Vec<WellMarker> {
    let n_rows = shape.n_rows() as f32;
    shape
        .wells()
        .zip(values)
        .map(|(well, value)| {
            let position = Point::new(
                well.column() as f32 + WELL_X_OFFSET,
                n_rows - well.row() as f32,
            );
            let hover = match value {
                Some(value) => format!("{well}<br>{}", format_value(*value)),
                None => well.to_string(),
            };
            WellMarker::new(well, position, hover)
        })
        .collect()
}

/// Inputs for [`marker_style`] that do not come from the well data.
pub(super) struct StyleDefaults<'a> {
    pub size: f32,
    pub showscale: bool,
    pub colorscale: Colorscale,
    pub colorbar_title: &'a str,
}

/// Computes the default marker style, then applies caller overrides field by
/// field.
///
/// # Errors
///
/// Returns [`PlateError::Input`] if override colors are longer than the
/// plate.
pub(super) fn marker_style(
    data: &WellDataArrays,
    defaults: StyleDefaults<'_>,
    overrides: Option<&MarkerOverrides>,
) -> Result<MarkerStyle, PlateError> {
    let derived = !data.has_custom_colors();
    let mut style = MarkerStyle {
        size: defaults.size,
        symbol: MarkerSymbol::default(),
        colors: data.colors().to_vec(),
        colorscale: derived.then_some(defaults.colorscale),
        showscale: derived && defaults.showscale,
        colorbar: None,
        line: StrokeDefinition::new(Color::default(), OUTLINE_WIDTH),
        opacity: None,
    };

    if let Some(overrides) = overrides {
        if let Some(size) = overrides.size() {
            style.size = size;
        }
        if let Some(symbol) = overrides.symbol() {
            style.symbol = symbol;
        }
        if let Some(colors) = overrides.colors() {
            style.colors = pad_or_check("marker.colors", Some(colors), data.len())?;
        }
        if let Some(colorscale) = overrides.colorscale() {
            style.colorscale = Some(colorscale);
        }
        if let Some(showscale) = overrides.showscale() {
            style.showscale = showscale;
        }
        if let Some(color) = overrides.line_color() {
            style.line.set_color(color);
        }
        if let Some(width) = overrides.line_width() {
            style.line.set_width(width);
        }
        if let Some(opacity) = overrides.opacity() {
            style.opacity = Some(opacity);
        }
    }

    // A colorbar only makes sense against a colorscale
    if style.showscale && style.colorscale.is_some() {
        style.colorbar = Some(ColorBar::new(defaults.colorbar_title));
    }

    Ok(style)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::data::ColorValue;

    fn defaults(showscale: bool) -> StyleDefaults<'static> {
        StyleDefaults {
            size: 41.0,
            showscale,
            colorscale: Colorscale::Blues,
            colorbar_title: "Value",
        }
    }

    #[test]
    fn test_default_marker_size() {
        assert_eq!(default_marker_size(PlateShape::default()), 41.0);
        assert_eq!(default_marker_size(PlateShape::new(2, 3).unwrap()), 60.0);
        assert_eq!(default_marker_size(PlateShape::new(16, 24).unwrap()), 20.0);
        assert_eq!(default_marker_size(PlateShape::new(32, 48).unwrap()), 10.0);
    }

    #[test]
    fn test_marker_positions() {
        let shape = PlateShape::default();
        let markers = well_markers(shape, &vec![None; shape.n_wells()]);
        assert_eq!(markers.len(), 96);

        assert_approx_eq!(f32, markers[0].position().x(), 1.4);
        assert_approx_eq!(f32, markers[0].position().y(), 8.0);
        assert_approx_eq!(f32, markers[95].position().x(), 12.4);
        assert_approx_eq!(f32, markers[95].position().y(), 1.0);
        assert_eq!(markers[95].well().to_string(), "H12");
    }

    #[test]
    fn test_hover_labels() {
        let shape = PlateShape::new(1, 3).unwrap();
        let markers = well_markers(shape, &[Some(5.0), None, Some(-0.25)]);
        let hovers: Vec<&str> = markers.iter().map(WellMarker::hover).collect();
        assert_eq!(hovers, ["A1<br>5.0", "A2", "A3<br>-0.25"]);
    }

    #[test]
    fn test_derived_colors_get_colorbar() {
        let data = WellDataArrays::normalize(Some(&[Some(1.0)][..]), None, None, 4).unwrap();
        let style = marker_style(&data, defaults(true), None).unwrap();

        assert_eq!(style.colorscale(), Some(Colorscale::Blues));
        assert!(style.showscale());
        assert_eq!(style.colorbar().map(ColorBar::title), Some("Value"));
        assert_eq!(style.line().width(), 1.0);
        assert_eq!(style.line().color(), Color::default());
    }

    #[test]
    fn test_custom_colors_ignore_showscale() {
        let colors = [Some(ColorValue::from("red"))];
        let data = WellDataArrays::normalize(None, Some(&colors[..]), None, 4).unwrap();
        let style = marker_style(&data, defaults(true), None).unwrap();

        assert_eq!(style.colorscale(), None);
        assert!(!style.showscale());
        assert!(style.colorbar().is_none());
    }

    #[test]
    fn test_overrides_replace_only_set_fields() {
        let data = WellDataArrays::normalize(None, None, None, 4).unwrap();
        let overrides = MarkerOverrides::new()
            .with_size(30.0)
            .with_symbol(MarkerSymbol::Square)
            .with_line_width(3.0)
            .with_opacity(0.5);
        let style = marker_style(&data, defaults(false), Some(&overrides)).unwrap();

        assert_eq!(style.size(), 30.0);
        assert_eq!(style.symbol(), MarkerSymbol::Square);
        assert_eq!(style.line().width(), 3.0);
        assert_eq!(style.line().color(), Color::default());
        assert_eq!(style.opacity(), Some(0.5));
        assert_eq!(style.colorscale(), Some(Colorscale::Blues));
        assert_eq!(style.colors(), data.colors());
    }

    #[test]
    fn test_override_colors_are_padded() {
        let data = WellDataArrays::normalize(None, None, None, 3).unwrap();
        let overrides = MarkerOverrides::new().with_colors(vec![Some(ColorValue::from("teal"))]);
        let style = marker_style(&data, defaults(false), Some(&overrides)).unwrap();
        assert_eq!(style.colors(), &[Some(ColorValue::from("teal")), None, None]);

        let overrides = MarkerOverrides::new().with_colors(vec![None; 4]);
        let err = marker_style(&data, defaults(false), Some(&overrides)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "marker.colors length (4) exceeds total wells (3)"
        );
    }

    #[test]
    fn test_showscale_override_enables_colorbar() {
        let data = WellDataArrays::normalize(None, None, None, 2).unwrap();
        let overrides = MarkerOverrides::new().with_showscale(true);
        let style = marker_style(&data, defaults(false), Some(&overrides)).unwrap();
        assert!(style.colorbar().is_some());
    }
}
