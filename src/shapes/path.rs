//! Path commands - the contract handed to the rendering surface
//!
//! A `ClosedPath` is an ordered list of drawing commands describing one
//! closed contour: a single `MoveTo`, any number of quadratic segments,
//! and a final `Close`.

use super::point::Point;
use super::polyline::Polyline;

/// A single drawing command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start the contour at a point
    MoveTo(Point),
    /// Quadratic Bézier from the current point to `end`
    QuadTo { control: Point, end: Point },
    /// Close the contour
    Close,
}

/// One closed contour made of quadratic curve segments
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedPath {
    commands: Vec<PathCommand>,
}

impl ClosedPath {
    /// Start a new path at `start`
    pub fn begin(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    /// Append a quadratic segment
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Finish the contour
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Point given to the initial `MoveTo`
    pub fn start(&self) -> Point {
        match self.commands.first() {
            Some(PathCommand::MoveTo(p)) => *p,
            _ => Point::ZERO,
        }
    }

    /// End point of the last drawing command (before `Close`)
    pub fn end_point(&self) -> Point {
        self.commands
            .iter()
            .rev()
            .find_map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => Some(p),
                PathCommand::QuadTo { end, .. } => Some(end),
                PathCommand::Close => None,
            })
            .unwrap_or(Point::ZERO)
    }

    /// Number of quadratic segments
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Iterate segments as `(start, control, end)` triples
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        let mut current = self.start();
        self.commands.iter().filter_map(move |cmd| match *cmd {
            PathCommand::MoveTo(p) => {
                current = p;
                None
            }
            PathCommand::QuadTo { control, end } => {
                let start = current;
                current = end;
                Some((start, control, end))
            }
            PathCommand::Close => None,
        })
    }

    /// Flatten every curve into `segments_per_curve` straight pieces
    ///
    /// The result is a closed polyline; the final end point is dropped
    /// because closing the polyline reconnects it to the start.
    pub fn flatten(&self, segments_per_curve: usize) -> Polyline {
        let steps = segments_per_curve.max(1);
        let mut points = Vec::with_capacity(1 + self.curve_count() * steps);
        points.push(self.start());

        for (start, control, end) in self.segments() {
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                points.push(quadratic_bezier(start, control, end, t));
            }
        }

        if points.len() > 1 && self.end_point() == self.start() {
            points.pop();
        }

        Polyline::closed(points)
    }
}

/// Evaluate a quadratic Bézier curve at `t`
///
/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ClosedPath {
        let mut path = ClosedPath::begin(Point::new(0.0, 0.0));
        path.quad_to(Point::new(5.0, -2.0), Point::new(10.0, 0.0))
            .quad_to(Point::new(7.0, 5.0), Point::new(5.0, 10.0))
            .quad_to(Point::new(2.0, 5.0), Point::new(0.0, 0.0));
        path.close()
    }

    #[test]
    fn test_command_accessors() {
        let path = triangle();
        assert_eq!(path.commands().len(), 5);
        assert_eq!(path.curve_count(), 3);
        assert_eq!(path.start(), Point::new(0.0, 0.0));
        assert_eq!(path.end_point(), Point::new(0.0, 0.0));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_segments_chain_end_to_start() {
        let segments: Vec<_> = triangle().segments().collect();
        assert_eq!(segments.len(), 3);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].2, pair[1].0);
        }
    }

    #[test]
    fn test_quadratic_bezier_endpoints() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(5.0, 10.0);
        let p2 = Point::new(10.0, 0.0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);

        // Apex of a symmetric curve sits halfway to the control point
        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_flatten_drops_duplicate_closing_point() {
        let polyline = triangle().flatten(4);
        assert_eq!(polyline.points().len(), 12);
        assert_eq!(polyline.points()[0], Point::new(0.0, 0.0));
        assert_eq!(polyline.points()[4], Point::new(10.0, 0.0));
    }
}
