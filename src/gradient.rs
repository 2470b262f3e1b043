//! Gradient layer specification.

use kurbo::{Point, Rect};

use crate::Color;

/// A representation of a point relative to a unit rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPoint {
    u: f64,
    v: f64,
}

impl UnitPoint {
    /// The top-left corner of the unit square, `(0.0, 0.0)`.
    pub const TOP_LEFT: UnitPoint = UnitPoint::new(0.0, 0.0);

    /// The bottom-left corner of the unit square, `(0.0, 1.0)`.
    pub const BOTTOM_LEFT: UnitPoint = UnitPoint::new(0.0, 1.0);

    /// Create a new `UnitPoint`.
    ///
    /// The `u` and `v` coordinates describe the point, with `(0.0, 0.0)` being
    /// the top-left, and `(1.0, 1.0)` being the bottom-right.
    pub const fn new(u: f64, v: f64) -> UnitPoint {
        UnitPoint { u, v }
    }

    /// Given a rectangle, resolve the point within the rectangle.
    pub fn resolve(self, rect: Rect) -> Point {
        Point::new(
            rect.x0 + self.u * (rect.x1 - rect.x0),
            rect.y0 + self.v * (rect.y1 - rect.y0),
        )
    }
}

/// A gradient drawing instruction, composited as part of a view's sublayer
/// stack.
///
/// The gradient axis is given in unit coordinates relative to [`frame`]; the
/// stop `locations` are normalized positions (0.0 to 1.0) along that axis,
/// parallel to `colors`.
///
/// [`frame`]: GradientLayer::frame
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayer {
    /// The bounding rectangle of the layer.
    pub frame: Rect,
    /// The color stops, in order along the gradient axis.
    pub colors: Vec<Color>,
    /// The start of the gradient axis (corresponding to location 0.0).
    pub start: UnitPoint,
    /// The end of the gradient axis (corresponding to location 1.0).
    pub end: UnitPoint,
    /// Normalized stop positions along the axis.
    pub locations: Vec<f64>,
}

impl GradientLayer {
    /// Create a vertical gradient layer filling `frame`.
    ///
    /// The axis runs from the top of the frame (`(0.0, 0.0)` in unit
    /// coordinates) to the bottom (`(0.0, 1.0)`), with exactly two stop
    /// locations, `0.0` and `1.0`, whatever the number of colors. Colors are
    /// used in order from top to bottom and are passed through unmodified;
    /// empty and single-element lists are allowed.
    pub fn vertical(frame: Rect, colors: &[Color]) -> GradientLayer {
        GradientLayer {
            frame,
            colors: colors.to_vec(),
            start: UnitPoint::TOP_LEFT,
            end: UnitPoint::BOTTOM_LEFT,
            locations: vec![0.0, 1.0],
        }
    }

    /// The start of the gradient axis, resolved within the layer's frame.
    pub fn start_point(&self) -> Point {
        self.start.resolve(self.frame)
    }

    /// The end of the gradient axis, resolved within the layer's frame.
    pub fn end_point(&self) -> Point {
        self.end.resolve(self.frame)
    }
}
