//! Polyline type - flattened point sequences
//!
//! Curved paths are flattened into a `Polyline` before they reach the
//! canvas. Segment lengths are cached so the outline can be sampled
//! uniformly by arc length.

use super::point::Point;
use super::traits::Shape;

/// A closed sequence of points
///
/// Points are connected in order and the last point connects back to
/// the first.
#[derive(Clone, Debug)]
pub struct Polyline {
    /// Points along the outline
    points: Vec<Point>,
    /// Cached segment lengths for uniform sampling
    segment_lengths: Vec<f32>,
    /// Total outline length
    total_length: f32,
}

impl Polyline {
    pub fn closed(points: Vec<Point>) -> Self {
        let segment_lengths: Vec<f32> = (0..points.len())
            .map(|i| points[i].distance(points[(i + 1) % points.len()]))
            .collect();
        let total_length = segment_lengths.iter().sum();

        Self {
            points,
            segment_lengths,
            total_length,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Shape for Polyline {
    fn sample(&self, t: f32) -> Point {
        match self.points.len() {
            0 => return Point::ZERO,
            1 => return self.points[0],
            _ => {}
        }

        if self.total_length == 0.0 {
            return self.points[0];
        }

        let target_dist = t.clamp(0.0, 1.0) * self.total_length;
        let mut accumulated = 0.0;

        for (i, &seg_len) in self.segment_lengths.iter().enumerate() {
            if accumulated + seg_len >= target_dist || i == self.segment_lengths.len() - 1 {
                let local_t = if seg_len > 0.0 {
                    ((target_dist - accumulated) / seg_len).min(1.0)
                } else {
                    0.0
                };

                let start = self.points[i];
                let end = self.points[(i + 1) % self.points.len()];
                return start.lerp(end, local_t);
            }
            accumulated += seg_len;
        }

        self.points[0]
    }

    fn length(&self) -> f32 {
        self.total_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polyline {
        Polyline::closed(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_closed_length_includes_wrap_segment() {
        let square = unit_square();
        assert_eq!(square.points().len(), 4);
        assert!((square.length() - 4.0).abs() < 1e-6);
        assert!(square.is_closed());
    }

    #[test]
    fn test_sample_by_arc_length() {
        let square = unit_square();

        let p = square.sample(0.125);
        assert!((p.x - 0.5).abs() < 1e-5 && p.y.abs() < 1e-5);

        let p = square.sample(0.5);
        assert!((p.x - 1.0).abs() < 1e-5 && (p.y - 1.0).abs() < 1e-5);

        // Last segment runs back to the start
        let p = square.sample(0.875);
        assert!(p.x.abs() < 1e-5 && (p.y - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_polylines() {
        assert_eq!(Polyline::closed(Vec::new()).sample(0.3), Point::ZERO);
        let single = Polyline::closed(vec![Point::new(2.0, 3.0)]);
        assert_eq!(single.sample(0.7), Point::new(2.0, 3.0));
    }
}
