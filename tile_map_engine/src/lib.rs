/*!
# Tile Map Engine

Spatial culling primitives for an interactive tiled-map renderer.

Every frame the camera produces an inverse projection matrix. From it the
engine builds a view `Frustum` in tile units, then walks a quadtree of
`Aabb` tile boxes to decide which tiles are invisible (pruned), fully
visible (taken whole) or partially visible (subdivided).

## Architecture

- **geometry**: `Frustum`, `Aabb` and the tri-valued `IntersectResult`
- **tile**: tile identifiers and the covering-tiles traversal
- **image**: alpha/RGBA pixel buffers backing glyph and icon textures
- **log**: pluggable logger used by the non-hot-path entry points

Geometry values are immutable `Copy` types with no shared state, so tiles
can be classified from any number of threads without synchronization.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod image;
pub mod tile;

// Main tilemap namespace module
pub mod tilemap {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine-wide services (logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Culling primitives
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Tile selection
    pub mod tile {
        pub use crate::tile::*;
    }

    // Pixel buffers
    pub mod image {
        pub use crate::image::*;
    }
}

// Re-export math library at crate root
pub use glam;
