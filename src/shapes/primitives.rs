//! Primitive shapes - Rectangle and RoundedRect
//!
//! These back the eye: the pupil is a plain filled square and the eye
//! white is a rectangle with its top corners rounded.

use std::f32::consts::{FRAC_PI_2, PI};

use super::point::Point;
use super::traits::Shape;

/// An axis-aligned rectangle centered at (cx, cy)
///
/// The outline is traced clockwise on screen starting from the
/// top-left corner: top → right → bottom → left.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Center X coordinate
    pub cx: f32,
    /// Center Y coordinate
    pub cy: f32,
    /// Half-width (distance from center to edge)
    pub half_width: f32,
    /// Half-height (distance from center to edge)
    pub half_height: f32,
}

impl Rectangle {
    /// Create a rectangle at a specific position
    pub fn at(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            cx,
            cy,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// Create a rectangle whose bottom edge is centered on `anchor`
    pub fn above(anchor: Point, width: f32, height: f32) -> Self {
        Self::at(anchor.x, anchor.y - height / 2.0, width, height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Top-left corner
    pub fn min(&self) -> Point {
        Point::new(self.cx - self.half_width, self.cy - self.half_height)
    }

    /// Bottom-right corner
    pub fn max(&self) -> Point {
        Point::new(self.cx + self.half_width, self.cy + self.half_height)
    }

    /// Midpoint of the bottom edge
    pub fn bottom_center(&self) -> Point {
        Point::new(self.cx, self.cy + self.half_height)
    }

    /// Corners in tracing order
    fn corners(&self) -> [Point; 4] {
        let (min, max) = (self.min(), self.max());
        [
            min,                       // Top-left
            Point::new(max.x, min.y),  // Top-right
            max,                       // Bottom-right
            Point::new(min.x, max.y),  // Bottom-left
        ]
    }
}

impl Shape for Rectangle {
    fn sample(&self, t: f32) -> Point {
        let corners = self.corners();

        // One quarter of t per edge
        let segment = ((t * 4.0) as usize).min(3);
        let local_t = t * 4.0 - segment as f32;

        corners[segment].lerp(corners[(segment + 1) % 4], local_t)
    }

    fn length(&self) -> f32 {
        4.0 * (self.half_width + self.half_height)
    }
}

/// Per-corner radii, clockwise from the top-left
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Only the two top corners rounded
    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            ..Self::default()
        }
    }
}

/// A rectangle with independently rounded corners
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedRect {
    pub rect: Rectangle,
    pub radii: CornerRadii,
}

/// Straight or circular piece of a rounded-rect outline
enum Piece {
    Line(Point, Point),
    Arc { center: Point, radius: f32, start: f32 },
}

impl Piece {
    fn length(&self) -> f32 {
        match *self {
            Piece::Line(a, b) => a.distance(b),
            Piece::Arc { radius, .. } => radius * FRAC_PI_2,
        }
    }

    fn at(&self, t: f32) -> Point {
        match *self {
            Piece::Line(a, b) => a.lerp(b, t),
            Piece::Arc { center, radius, start } => {
                let angle = start + t * FRAC_PI_2;
                center + Point::new(angle.cos(), angle.sin()) * radius
            }
        }
    }
}

impl RoundedRect {
    pub fn new(rect: Rectangle, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// Radii limited so opposite arcs never overlap
    pub fn clamped_radii(&self) -> CornerRadii {
        let limit = self.rect.half_width.min(self.rect.half_height).max(0.0);
        let clamp = |r: f32| r.clamp(0.0, limit);
        CornerRadii {
            top_left: clamp(self.radii.top_left),
            top_right: clamp(self.radii.top_right),
            bottom_right: clamp(self.radii.bottom_right),
            bottom_left: clamp(self.radii.bottom_left),
        }
    }

    /// Outline pieces clockwise on screen, starting after the top-left arc
    fn pieces(&self) -> [Piece; 8] {
        let r = self.clamped_radii();
        let (min, max) = (self.rect.min(), self.rect.max());

        [
            Piece::Line(Point::new(min.x + r.top_left, min.y), Point::new(max.x - r.top_right, min.y)),
            Piece::Arc {
                center: Point::new(max.x - r.top_right, min.y + r.top_right),
                radius: r.top_right,
                start: -FRAC_PI_2,
            },
            Piece::Line(Point::new(max.x, min.y + r.top_right), Point::new(max.x, max.y - r.bottom_right)),
            Piece::Arc {
                center: Point::new(max.x - r.bottom_right, max.y - r.bottom_right),
                radius: r.bottom_right,
                start: 0.0,
            },
            Piece::Line(Point::new(max.x - r.bottom_right, max.y), Point::new(min.x + r.bottom_left, max.y)),
            Piece::Arc {
                center: Point::new(min.x + r.bottom_left, max.y - r.bottom_left),
                radius: r.bottom_left,
                start: FRAC_PI_2,
            },
            Piece::Line(Point::new(min.x, max.y - r.bottom_left), Point::new(min.x, min.y + r.top_left)),
            Piece::Arc {
                center: Point::new(min.x + r.top_left, min.y + r.top_left),
                radius: r.top_left,
                start: PI,
            },
        ]
    }
}

impl Shape for RoundedRect {
    fn sample(&self, t: f32) -> Point {
        let pieces = self.pieces();
        let total: f32 = pieces.iter().map(Piece::length).sum();
        if total == 0.0 {
            return self.rect.center();
        }

        let target = t.clamp(0.0, 1.0) * total;
        let mut accumulated = 0.0;
        for (i, piece) in pieces.iter().enumerate() {
            let len = piece.length();
            if accumulated + len >= target || i == pieces.len() - 1 {
                let local_t = if len > 0.0 {
                    ((target - accumulated) / len).min(1.0)
                } else {
                    0.0
                };
                return piece.at(local_t);
            }
            accumulated += len;
        }

        self.rect.center()
    }

    fn length(&self) -> f32 {
        self.pieces().iter().map(Piece::length).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn test_rectangle() {
        let rect = Rectangle::at(10.0, 20.0, 8.0, 4.0);
        assert_eq!(rect.min(), Point::new(6.0, 18.0));
        assert_eq!(rect.max(), Point::new(14.0, 22.0));
        assert_eq!(rect.bottom_center(), Point::new(10.0, 22.0));

        // Starts at the top-left corner, a quarter later at the top-right
        assert!(close(rect.sample(0.0), Point::new(6.0, 18.0)));
        assert!(close(rect.sample(0.25), Point::new(14.0, 18.0)));
        assert!(close(rect.sample(1.0), Point::new(6.0, 18.0)));
    }

    #[test]
    fn test_rectangle_above_anchor() {
        let pupil = Rectangle::above(Point::new(0.0, 100.0), 50.0, 50.0);
        assert_eq!(pupil.bottom_center(), Point::new(0.0, 100.0));
        assert_eq!(pupil.min(), Point::new(-25.0, 50.0));
    }

    #[test]
    fn test_square_corner_radii_match_plain_rect() {
        let rect = Rectangle::at(0.0, 0.0, 2.0, 2.0);
        let rounded = RoundedRect::new(rect.clone(), CornerRadii::default());
        assert!((rounded.length() - rect.length()).abs() < 1e-5);
        assert!(close(rounded.sample(0.0), Point::new(-1.0, -1.0)));
    }

    #[test]
    fn test_rounded_rect_length() {
        let rounded = RoundedRect::new(Rectangle::at(0.0, 0.0, 170.0, 120.0), CornerRadii::top(50.0));
        // Two straight sides shortened by both arcs, plus two quarter circles
        let expected = (170.0 - 100.0) + 170.0 + 2.0 * (120.0 - 50.0) + 2.0 * 50.0 * FRAC_PI_2;
        assert!((rounded.length() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let rounded = RoundedRect::new(Rectangle::at(0.0, 0.0, 170.0, 120.0), CornerRadii::top(50.0));
        let (min, max) = (rounded.rect.min(), rounded.rect.max());
        for i in 0..100 {
            let p = rounded.sample(i as f32 / 100.0);
            assert!(p.x >= min.x - 1e-3 && p.x <= max.x + 1e-3);
            assert!(p.y >= min.y - 1e-3 && p.y <= max.y + 1e-3);
        }
        // Rounded top-left corner is cut away
        assert!(close(rounded.sample(0.0), Point::new(min.x + 50.0, min.y)));
    }

    #[test]
    fn test_radii_clamped_to_half_extent() {
        let radii = CornerRadii {
            top_left: 30.0,
            top_right: 2.0,
            bottom_right: -1.0,
            bottom_left: 5.0,
        };
        let rounded = RoundedRect::new(Rectangle::at(0.0, 0.0, 20.0, 10.0), radii);
        let clamped = rounded.clamped_radii();
        assert_eq!(clamped.top_left, 5.0);
        assert_eq!(clamped.top_right, 2.0);
        assert_eq!(clamped.bottom_right, 0.0);
        assert_eq!(clamped.bottom_left, 5.0);
    }
}
