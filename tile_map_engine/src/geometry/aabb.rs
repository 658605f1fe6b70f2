/// Aabb — axis-aligned box used as a tile quadtree node.
///
/// X/Y describe the tile footprint (tile units), Z the elevation range.
/// Subdivision only splits X and Y: children keep the parent's full Z
/// extent, so the tree is a quadtree and not an octree.

use glam::{DVec2, DVec3, DVec4};
use super::frustum::Frustum;
use super::intersect_result::IntersectResult;

/// Axis-Aligned Bounding Box with a cached center.
///
/// `min <= max` on every axis is a caller precondition. It is only checked
/// in debug builds; inverted boxes produce meaningless (but non-panicking)
/// results in release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
    /// (min + max) / 2
    pub center: DVec3,
}

impl Aabb {
    /// Create a box from its min and max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        debug_assert!(
            min.cmple(max).all(),
            "Aabb min {:?} must not exceed max {:?}",
            min,
            max
        );
        Self {
            min,
            max,
            center: (min + max) * 0.5,
        }
    }

    /// Extent along each axis (max - min)
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// One of the four X/Y children of this box.
    ///
    /// Even indices take the low-X half, indices 0 and 1 take the low-Y
    /// half. Z is copied unchanged. The four children tile the parent
    /// footprint with no gap and no overlap.
    ///
    /// `index` is expected in 0..=3.
    pub fn quadrant(&self, index: usize) -> Aabb {
        let split = [index % 2 == 0, index < 2];
        let mut q_min = self.min;
        let mut q_max = self.max;

        for axis in 0..2 {
            if split[axis] {
                q_max[axis] = self.center[axis];
            } else {
                q_min[axis] = self.center[axis];
            }
        }

        Aabb {
            min: q_min,
            max: q_max,
            center: (q_min + q_max) * 0.5,
        }
    }

    /// Signed X distance from `point` to the box (0 when inside the X range).
    pub fn distance_x(&self, point: DVec2) -> f64 {
        clamp(point.x, self.min.x, self.max.x) - point.x
    }

    /// Signed Y distance from `point` to the box (0 when inside the Y range).
    pub fn distance_y(&self, point: DVec2) -> f64 {
        clamp(point.y, self.min.y, self.max.y) - point.y
    }

    /// The 8 box corners as homogeneous points (w = 1).
    pub fn corners(&self) -> [DVec4; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec4::new(lo.x, lo.y, lo.z, 1.0),
            DVec4::new(hi.x, lo.y, lo.z, 1.0),
            DVec4::new(hi.x, hi.y, lo.z, 1.0),
            DVec4::new(lo.x, hi.y, lo.z, 1.0),
            DVec4::new(lo.x, lo.y, hi.z, 1.0),
            DVec4::new(hi.x, lo.y, hi.z, 1.0),
            DVec4::new(hi.x, hi.y, hi.z, 1.0),
            DVec4::new(lo.x, hi.y, hi.z, 1.0),
        ]
    }

    /// Classify this box against a frustum.
    ///
    /// Separating axis test over the 6 frustum plane normals followed by
    /// the 3 box axes. The 9 edge cross-product axes are not tested, so
    /// `Partial` is conservative: it may be returned for a box that does
    /// not touch the frustum. `None` and `Full` are exact.
    pub fn intersects_frustum(&self, frustum: &Frustum) -> IntersectResult {
        let corners = self.corners();
        let mut fully_inside = true;

        for plane in &frustum.planes {
            let inside = count_inside(plane, &corners);
            if inside == 0 {
                return IntersectResult::None;
            }
            // Full needs every plane: keep scanning even when this one passes
            if inside != corners.len() {
                fully_inside = false;
            }
        }

        if fully_inside {
            return IntersectResult::Full;
        }

        let extent = self.size();
        for axis in 0..3 {
            let mut proj_min = f64::MAX;
            let mut proj_max = -f64::MAX;

            for point in &frustum.points {
                let projected = point[axis] - self.min[axis];
                proj_min = proj_min.min(projected);
                proj_max = proj_max.max(projected);
            }

            if proj_max < 0.0 || proj_min > extent[axis] {
                return IntersectResult::None;
            }
        }

        IntersectResult::Partial
    }

    /// Classify this box against a single half-space `(n, d)`, inside
    /// being `n·p + d >= 0`.
    pub fn intersects_plane(&self, plane: DVec4) -> IntersectResult {
        let corners = self.corners();
        match count_inside(&plane, &corners) {
            0 => IntersectResult::None,
            n if n == corners.len() => IntersectResult::Full,
            _ => IntersectResult::Partial,
        }
    }
}

/// Number of points on the non-negative side of `plane`
fn count_inside(plane: &DVec4, points: &[DVec4; 8]) -> usize {
    points.iter().filter(|p| plane.dot(**p) >= 0.0).count()
}

/// min(hi, max(lo, v)), never panics on inverted bounds or NaN
fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    hi.min(lo.max(v))
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
