//! Geometry module — spatial culling primitives.
//!
//! Provides the camera `Frustum`, the quadtree node box `Aabb` and the
//! tri-valued `IntersectResult` they produce. All types are plain `Copy`
//! values: built once, never mutated, safe to share across threads.

mod aabb;
mod frustum;
mod intersect_result;

pub use aabb::Aabb;
pub use frustum::{
    Frustum,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP,
};
pub use intersect_result::IntersectResult;
