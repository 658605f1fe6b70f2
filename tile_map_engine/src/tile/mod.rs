//! Tile module — tile addressing and per-frame tile selection.
//!
//! Consumes the geometry primitives: a camera `Frustum` and a quadtree of
//! `Aabb` tile boxes produce the list of tiles to display.

mod covering_tiles;
mod tile_id;

pub use covering_tiles::{covering_tiles, CoveringTilesOptions, MAX_TILE_ZOOM};
pub use tile_id::{OverscaledTileId, TileId};
