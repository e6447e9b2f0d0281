//! Blob body - rounded, concave-sided diamond
//!
//! The body outline starts from the diamond inscribed in the bounding box
//! (top, right, bottom and left edge midpoints, in that cyclic order). Each
//! diamond corner is cut back by a corner radius and replaced by a quadratic
//! curve whose control point is the corner itself. Each flat edge between
//! two cuts becomes a quadratic curve whose control point is the edge
//! midpoint pulled toward the box center by the concavity factor.
//!
//! ```text
//!              pIn[0]  v[0]  pOut[0]
//!                  .----+----.
//!                 /           \     edge control points are pulled
//!     pOut[3]    /             \    toward the center, so every
//!         .     /       c       \   flat side bows inward
//!   v[3] +                       + v[1]
//! ```
//!
//! The result is always 1 `MoveTo`, 8 `QuadTo` and 1 `Close`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::path::ClosedPath;
use super::point::Point;

/// Default corner radius as a fraction of the smaller box dimension
pub const DEFAULT_CORNER_RADIUS_RATIO: f32 = 0.15;
/// Default pull of each edge control point toward the center
pub const DEFAULT_CONCAVITY: f32 = 0.2;

/// Number of diamond vertices
const VERTEX_COUNT: usize = 4;

/// Errors that can occur while building a blob path
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlobError {
    #[error("Invalid blob dimensions {width}x{height}: width and height must be finite and positive")]
    InvalidDimension { width: f32, height: f32 },
}

/// Inputs to the blob path builder
///
/// Only the dimensions are validated. Keeping `corner_radius_ratio` in
/// [0, 0.5) and `concavity` in [0, 1] is up to the caller; values outside
/// those ranges are used as given and may self-intersect or invert.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobParams {
    pub width: f32,
    pub height: f32,
    pub corner_radius_ratio: f32,
    pub concavity: f32,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

impl BlobParams {
    /// Box of the given size with the default shape controls
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            corner_radius_ratio: DEFAULT_CORNER_RADIUS_RATIO,
            concavity: DEFAULT_CONCAVITY,
        }
    }

    pub fn with_corner_radius_ratio(mut self, ratio: f32) -> Self {
        self.corner_radius_ratio = ratio;
        self
    }

    pub fn with_concavity(mut self, concavity: f32) -> Self {
        self.concavity = concavity;
        self
    }

    /// Reject non-finite or non-positive dimensions
    pub fn validate(&self) -> Result<(), BlobError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(BlobError::InvalidDimension {
                width: self.width,
                height: self.height,
            })
        }
    }

    fn warn_out_of_range(&self) {
        if !(0.0..0.5).contains(&self.corner_radius_ratio) {
            log::warn!(
                "corner radius ratio {} outside [0, 0.5), blob corners may overlap",
                self.corner_radius_ratio
            );
        }
        if !(0.0..=1.0).contains(&self.concavity) {
            log::warn!(
                "concavity {} outside [0, 1], blob edges may invert",
                self.concavity
            );
        }
    }
}

/// Construction points of one blob build
///
/// Index `i` of `vertices`, `p_in` and `p_out` refers to the same corner.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobGeometry {
    pub center: Point,
    pub vertices: [Point; VERTEX_COUNT],
    pub corner_radius: f32,
    /// Where rounding begins, on the edge arriving at each vertex
    pub p_in: [Point; VERTEX_COUNT],
    /// Where rounding ends, on the edge leaving each vertex
    pub p_out: [Point; VERTEX_COUNT],
    concavity: f32,
}

impl BlobGeometry {
    pub fn compute(params: &BlobParams) -> Result<Self, BlobError> {
        params.validate()?;
        params.warn_out_of_range();

        let BlobParams { width, height, .. } = *params;
        let center = Point::new(width / 2.0, height / 2.0);

        let vertices = [
            Point::new(width / 2.0, 0.0),    // Top
            Point::new(width, height / 2.0), // Right
            Point::new(width / 2.0, height), // Bottom
            Point::new(0.0, height / 2.0),   // Left
        ];
        let n = VERTEX_COUNT;
        let corner_radius = width.min(height) * params.corner_radius_ratio;

        let mut p_in = [Point::ZERO; VERTEX_COUNT];
        let mut p_out = [Point::ZERO; VERTEX_COUNT];
        for i in 0..n {
            let current = vertices[i];
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];

            let dir_in = (current - prev).normalize();
            let dir_out = (next - current).normalize();

            p_in[i] = current - dir_in * corner_radius;
            p_out[i] = current + dir_out * corner_radius;
        }

        Ok(Self {
            center,
            vertices,
            corner_radius,
            p_in,
            p_out,
            concavity: params.concavity,
        })
    }

    /// Control point of the flat edge leaving vertex `i`
    pub fn edge_control(&self, i: usize) -> Point {
        let next = (i + 1) % VERTEX_COUNT;
        let mid = self.p_out[i].midpoint(self.p_in[next]);
        mid + (self.center - mid) * self.concavity
    }

    /// Assemble the closed path
    pub fn to_path(&self) -> ClosedPath {
        let mut path = ClosedPath::begin(self.p_out[0]);
        for i in 0..VERTEX_COUNT {
            let next = (i + 1) % VERTEX_COUNT;
            path.quad_to(self.edge_control(i), self.p_in[next])
                .quad_to(self.vertices[next], self.p_out[next]);
        }
        path.close()
    }
}

/// Build the blob body path for `params`
pub fn build_blob_path(params: &BlobParams) -> Result<ClosedPath, BlobError> {
    Ok(BlobGeometry::compute(params)?.to_path())
}

/// Remembers the last built path and its inputs
///
/// The canvas asks for the path every frame; it only changes when a
/// slider moves.
#[derive(Default)]
pub struct BlobPathCache {
    entry: Option<(BlobParams, ClosedPath)>,
}

impl BlobPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, params: &BlobParams) -> Result<&ClosedPath, BlobError> {
        let entry = match self.entry.take() {
            Some(entry) if entry.0 == *params => entry,
            previous => {
                log::debug!("Rebuilding blob path for {:?}", params);
                match build_blob_path(params) {
                    Ok(path) => (*params, path),
                    Err(err) => {
                        // Keep serving the last good path
                        self.entry = previous;
                        return Err(err);
                    }
                }
            }
        };

        Ok(&self.entry.insert(entry).1)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
