//! Row and column header labels.

use platemap_core::{
    draw::{HorizontalAnchor, TextDefinition, VerticalAnchor},
    geometry::Point,
    well::{PlateShape, row_label},
};

use super::WELL_X_OFFSET;
use crate::scene::Annotation;

const MAX_FONT_SIZE: usize = 14;
const FONT_BUDGET: usize = 160;
/// Gap between the column headers and the first row.
const HEADER_GAP: f32 = 0.4;
const ROW_LABEL_X: f32 = 0.5;
const ROW_LABEL_PAD: f32 = 0.08;

/// Header font size: `min(14, 160 / max(n_rows, n_columns))`.
pub(super) fn label_font_size(shape: PlateShape) -> f32 {
    MAX_FONT_SIZE.min(FONT_BUDGET / shape.max_dimension()) as f32
}

/// Column headers `1..=n_columns` along the top, followed by row headers
/// down the left side.
pub(super) fn header_labels(
    shape: PlateShape,
    scale: f32,
    font_size: f32,
    font_family: &str,
) -> Vec<Annotation> {
    let n_rows = shape.n_rows() as f32;

    let mut column_style = TextDefinition::new();
    column_style.set_font_size(font_size);
    column_style.set_font_family(font_family);
    column_style.set_vertical_anchor(VerticalAnchor::Bottom);

    let mut row_style = TextDefinition::new();
    row_style.set_font_size(font_size);
    row_style.set_font_family(font_family);
    row_style.set_horizontal_anchor(HorizontalAnchor::Left);

    let columns = (1..=shape.n_columns()).map(|column| {
        Annotation::new(
            Point::new(column as f32 + WELL_X_OFFSET, n_rows + HEADER_GAP),
            column.to_string(),
            column_style.clone(),
        )
    });

    let row_x = ROW_LABEL_X + ROW_LABEL_PAD * scale;
    let rows = (0..shape.n_rows()).map(|row| {
        Annotation::new(
            Point::new(row_x, n_rows - row as f32),
            row_label(row),
            row_style.clone(),
        )
    });

    columns.chain(rows).collect()
}
