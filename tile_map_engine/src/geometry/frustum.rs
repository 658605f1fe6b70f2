/// Frustum — six clipping planes plus the eight corners that define them.
///
/// Each plane is represented as a DVec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed offset
/// - A point P is inside the half-space if dot(plane, P_homogeneous) >= 0
///
/// The frustum lives in tile working space: X/Y are expressed in tile units
/// at the requested zoom, Z keeps the camera's world elevation units.
/// The camera subsystem owns the projection; this type only consumes its
/// inverse and is rebuilt whenever projection, zoom or world size change.

use glam::{DMat4, DVec3, DVec4};

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_BOTTOM: usize = 4;
pub const PLANE_TOP: usize = 5;

/// Clip-space cube corners, in the winding used by `PLANE_POINT_INDICES`.
///
/// 0..3 lie on the near face (z = -1), 4..7 on the far face (z = 1).
const CLIP_SPACE_CORNERS: [DVec4; 8] = [
    DVec4::new(-1.0, 1.0, -1.0, 1.0),
    DVec4::new(1.0, 1.0, -1.0, 1.0),
    DVec4::new(1.0, -1.0, -1.0, 1.0),
    DVec4::new(-1.0, -1.0, -1.0, 1.0),
    DVec4::new(-1.0, 1.0, 1.0, 1.0),
    DVec4::new(1.0, 1.0, 1.0, 1.0),
    DVec4::new(1.0, -1.0, 1.0, 1.0),
    DVec4::new(-1.0, -1.0, 1.0, 1.0),
];

/// Corner triplets for near, far, left, right, bottom, top.
///
/// The winding makes every derived normal point into the volume.
const PLANE_POINT_INDICES: [[usize; 3]; 6] = [
    [0, 1, 2],
    [6, 5, 4],
    [0, 3, 7],
    [2, 1, 5],
    [3, 2, 6],
    [0, 4, 5],
];

/// Camera view volume used for tile culling.
///
/// Immutable once built. `points` and `planes` are public so that
/// traversal code and debug overlays can read them directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Corner points: near face 0..3, far face 4..7
    pub points: [DVec3; 8],
    /// Frustum planes: near, far, left, right, bottom, top
    pub planes: [DVec4; 6],
}

impl Frustum {
    /// Build a frustum from an inverse projection matrix.
    ///
    /// Each clip-space corner is unprojected, then rescaled by
    /// `s = (1 / w) / world_size * 2^zoom` on X, Y and W. Z is only divided
    /// by `w`, so elevation stays in world units while X/Y land in tile
    /// units at `zoom`.
    ///
    /// No validation is done: a singular matrix (w == 0 for a corner)
    /// yields infinite or NaN components.
    pub fn from_inverse_projection(inv_proj: &DMat4, world_size: f64, zoom: f64) -> Self {
        let scale = zoom.exp2();

        let mut points = [DVec3::ZERO; 8];
        for (point, corner) in points.iter_mut().zip(CLIP_SPACE_CORNERS.iter()) {
            let v = *inv_proj * *corner;
            let inv_w = 1.0 / v.w;
            let s = inv_w / world_size * scale;
            *point = DVec3::new(v.x * s, v.y * s, v.z * inv_w);
        }

        let mut planes = [DVec4::ZERO; 6];
        for (plane, indices) in planes.iter_mut().zip(PLANE_POINT_INDICES.iter()) {
            *plane = plane_from_points(
                points[indices[0]],
                points[indices[1]],
                points[indices[2]],
            );
        }

        Self { points, planes }
    }

    /// Same as `from_inverse_projection` with `world_size = 1` and `zoom = 0`.
    pub fn from_inverse_projection_unscaled(inv_proj: &DMat4) -> Self {
        Self::from_inverse_projection(inv_proj, 1.0, 0.0)
    }

    /// Test whether a point lies inside (or on) every plane.
    pub fn contains_point(&self, point: DVec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }
}

/// Plane through three points, normal = normalize((p0 - p1) × (p2 - p1)).
///
/// Collinear points give a zero cross product and a NaN plane.
fn plane_from_points(p0: DVec3, p1: DVec3, p2: DVec3) -> DVec4 {
    let a = p0 - p1;
    let b = p2 - p1;
    let n = a.cross(b);
    // Zero length must propagate NaN (glam's normalize() may assert instead)
    let n = n / n.length();
    n.extend(-n.dot(p1))
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
