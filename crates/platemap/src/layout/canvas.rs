//! Canvas sizing.
//!
//! Each grid cell is `cell_size * scale` pixels. The left margin grows with
//! the number of rows to leave room for the row headers; the other margins
//! are fixed. Axis ranges extend one grid unit past the plate outline.

use platemap_core::{color::Color, geometry::Insets, well::PlateShape};

use super::frame::{OUTLINE_BOTTOM_Y, OUTLINE_LEFT_X, outline_right_x, outline_top_y};
use crate::scene::{AxisRange, Canvas};

const AXIS_PADDING: f32 = 1.0;
const BASE_MARGIN: f64 = 20.0;
const MARGIN_PER_ROW: f64 = 5.0;

pub(super) fn plate_canvas(
    shape: PlateShape,
    scale: f32,
    cell_size: f64,
    background: Color,
) -> Canvas {
    let scale = f64::from(scale);
    let n_rows = shape.n_rows() as f64;
    let n_columns = shape.n_columns() as f64;

    let left = scale * (BASE_MARGIN + MARGIN_PER_ROW * n_rows);
    let side = scale * BASE_MARGIN;
    let cell_px = cell_size * scale;

    // Truncation matches integer pixel sizing
    let width = (cell_px * n_columns + left + side) as u32;
    let height = (cell_px * n_rows + side + side) as u32;

    let margin = Insets::new(side as f32, side as f32, side as f32, left as f32);
    let x_range = AxisRange::new(
        OUTLINE_LEFT_X - AXIS_PADDING,
        outline_right_x(shape) + AXIS_PADDING,
    );
    let y_range = AxisRange::new(
        OUTLINE_BOTTOM_Y - AXIS_PADDING,
        outline_top_y(shape) + AXIS_PADDING,
    );

    Canvas::new(width, height, margin, x_range, y_range, background)
}
