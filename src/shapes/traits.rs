//! Shape trait definition
//!
//! The `Shape` trait is the common abstraction over everything the mascot
//! is built from: the flattened blob outline, the eye white, the pupil.
//! Shapes are sampled parametrically so the canvas can trace any of them
//! as an outline overlay without knowing its concrete type.

use super::point::Point;

/// A closed or open outline that can be traced
///
/// ## Parametric Representation
///
/// - `t = 0.0` → Start of the outline
/// - `t = 0.5` → Halfway along it (by arc length where the shape supports it)
/// - `t = 1.0` → End (wraps back to start for closed shapes)
///
/// ## Coordinate System
///
/// Model units, origin top-left, Y increasing downward.
pub trait Shape: Send + Sync {
    /// Sample the outline at parameter t in [0, 1]
    fn sample(&self, t: f32) -> Point;

    /// Approximate outline length in model units
    ///
    /// Default implementation returns 1.0.
    fn length(&self) -> f32 {
        1.0
    }

    /// Whether the end of the outline connects back to the start
    fn is_closed(&self) -> bool {
        true
    }
}

/// Sample a shape at `num_points` evenly spaced parameters
///
/// For closed shapes `t` runs over [0, 1) so the start point is not
/// duplicated; open shapes include both endpoints.
pub fn shape_to_points<S: Shape + ?Sized>(shape: &S, num_points: usize) -> Vec<Point> {
    if num_points == 0 {
        return Vec::new();
    }

    let denom = if shape.is_closed() || num_points == 1 {
        num_points as f32
    } else {
        (num_points - 1) as f32
    };

    (0..num_points)
        .map(|i| shape.sample(i as f32 / denom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Segment;

    impl Shape for Segment {
        fn sample(&self, t: f32) -> Point {
            Point::new(10.0 * t, 0.0)
        }

        fn is_closed(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_open_shape_includes_endpoints() {
        let points = shape_to_points(&Segment, 3);
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn test_zero_points() {
        assert!(shape_to_points(&Segment, 0).is_empty());
    }
}
