//! The decorative plate frame.
//!
//! A gray rectangle hugs the well grid, and a thicker outline traces the
//! physical plate with a notched top-left corner. Coordinates are in grid
//! units and do not change with the figure scale.

use platemap_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition},
    geometry::{Bounds, Point},
    well::PlateShape,
};

use super::WELL_X_OFFSET;
use crate::scene::FrameShape;

const FRAME_WIDTH: f32 = 2.0;
const BORDER_WIDTH: f32 = 4.0;

/// X coordinate of the outline's left edge.
pub(super) const OUTLINE_LEFT_X: f32 = 0.5;
/// Y coordinate of the outline's bottom edge.
pub(super) const OUTLINE_BOTTOM_Y: f32 = 0.5;
/// Height of the notch above the last row.
const NOTCH: f32 = 0.5;

/// X coordinate of the outline's right edge.
pub(super) fn outline_right_x(shape: PlateShape) -> f32 {
    shape.n_columns() as f32 + WELL_X_OFFSET + 0.5
}

/// Y coordinate of the outline's top edge.
pub(super) fn outline_top_y(shape: PlateShape) -> f32 {
    shape.n_rows() as f32 + 1.0
}

/// Builds the frame rectangle followed by the five outline segments:
/// bottom edge, left edge, notch diagonal, top edge, right edge.
pub(super) fn plate_frame(shape: PlateShape, frame: Color, border: Color) -> Vec<FrameShape> {
    let n_rows = shape.n_rows() as f32;
    let n_columns = shape.n_columns() as f32;

    let left_x = OUTLINE_LEFT_X;
    let right_x = outline_right_x(shape);
    let bottom_y = OUTLINE_BOTTOM_Y;
    let top_y = outline_top_y(shape);
    let notch_y = n_rows + 0.5;

    let rect = FrameShape::Rect {
        bounds: Bounds::new_from_corners(
            Point::new(0.62 + WELL_X_OFFSET, 0.72),
            Point::new(n_columns + WELL_X_OFFSET + 0.38, n_rows + 0.38),
        ),
        stroke: StrokeDefinition::new(frame, FRAME_WIDTH),
    };

    let border = StrokeDefinition::new(border, BORDER_WIDTH).with_cap(StrokeCap::Round);
    let segment = |start: Point, end: Point| FrameShape::Line {
        start,
        end,
        stroke: border.clone(),
    };

    vec![
        rect,
        segment(Point::new(left_x, bottom_y), Point::new(right_x, bottom_y)),
        segment(Point::new(left_x, bottom_y), Point::new(left_x, notch_y)),
        segment(
            Point::new(left_x, notch_y),
            Point::new(left_x + NOTCH, top_y),
        ),
        segment(Point::new(left_x + NOTCH, top_y), Point::new(right_x, top_y)),
        segment(Point::new(right_x, bottom_y), Point::new(right_x, top_y)),
    ]
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn endpoints(shape: &FrameShape) -> (Point, Point) {
        match shape {
            FrameShape::Line { start, end, .. } => (*start, *end),
            FrameShape::Rect { .. } => panic!("expected a line"),
        }
    }

    fn assert_point(actual: Point, x: f32, y: f32) {
        assert_approx_eq!(f32, actual.x(), x, epsilon = 1e-5);
        assert_approx_eq!(f32, actual.y(), y, epsilon = 1e-5);
    }

    #[test]
    fn test_frame_rectangle() {
        let shapes = plate_frame(
            PlateShape::default(),
            Color::new("darkgray").unwrap(),
            Color::default(),
        );
        assert_eq!(shapes.len(), 6);

        let FrameShape::Rect { bounds, stroke } = &shapes[0] else {
            panic!("first shape should be the rectangle");
        };
        assert_approx_eq!(f32, bounds.min_x(), 1.02, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.max_x(), 12.78, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.min_y(), 0.72, epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.max_y(), 8.38, epsilon = 1e-5);
        assert_eq!(stroke.width(), 2.0);
        assert_eq!(stroke.color(), Color::new("darkgray").unwrap());
    }

    #[test]
    fn test_outline_segments() {
        let shapes = plate_frame(PlateShape::default(), Color::default(), Color::default());

        let (start, end) = endpoints(&shapes[1]);
        assert_point(start, 0.5, 0.5);
        assert_point(end, 12.9, 0.5);

        let (start, end) = endpoints(&shapes[2]);
        assert_point(start, 0.5, 0.5);
        assert_point(end, 0.5, 8.5);

        let (start, end) = endpoints(&shapes[3]);
        assert_point(start, 0.5, 8.5);
        assert_point(end, 1.0, 9.0);

        let (start, end) = endpoints(&shapes[4]);
        assert_point(start, 1.0, 9.0);
        assert_point(end, 12.9, 9.0);

        let (start, end) = endpoints(&shapes[5]);
        assert_point(start, 12.9, 0.5);
        assert_point(end, 12.9, 9.0);

        for shape in &shapes[1..] {
            assert_eq!(shape.stroke().width(), 4.0);
        }
    }
}
