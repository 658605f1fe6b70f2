/// Tile identifiers.
///
/// A `TileId` addresses one tile of the web-mercator pyramid: zoom level,
/// column, row and the world copy it belongs to. `OverscaledTileId` adds
/// the zoom at which the tile is displayed, which can exceed the source's
/// maximum zoom.

use std::fmt;

/// Canonical tile address plus world copy index.
///
/// `x` and `y` are in `0..2^z`. `wrap` is 0 for the primary world,
/// negative/positive for copies to the west/east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    pub z: u8,
    pub x: u32,
    pub y: u32,
    pub wrap: i32,
}

impl TileId {
    pub fn new(z: u8, x: u32, y: u32, wrap: i32) -> Self {
        debug_assert!(z < 32, "zoom {} exceeds the u32 tile range", z);
        debug_assert!(
            u64::from(x) < 1u64 << z && u64::from(y) < 1u64 << z,
            "tile {}/{}/{} out of range",
            z,
            x,
            y
        );
        Self { z, x, y, wrap }
    }

    /// The four children at `z + 1`.
    ///
    /// Child `i` is `(2x + i % 2, 2y + i / 2)`, the same order as
    /// `Aabb::quadrant(i)`.
    pub fn children(&self) -> [TileId; 4] {
        let z = self.z + 1;
        let (x, y) = (self.x << 1, self.y << 1);
        [
            TileId::new(z, x, y, self.wrap),
            TileId::new(z, x + 1, y, self.wrap),
            TileId::new(z, x, y + 1, self.wrap),
            TileId::new(z, x + 1, y + 1, self.wrap),
        ]
    }

    /// The tile one level up, or `None` at zoom 0.
    pub fn parent(&self) -> Option<TileId> {
        if self.z == 0 {
            return None;
        }
        Some(TileId::new(self.z - 1, self.x >> 1, self.y >> 1, self.wrap))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// A tile displayed at `overscaled_z >= canonical.z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverscaledTileId {
    pub overscaled_z: u8,
    pub canonical: TileId,
}

impl OverscaledTileId {
    pub fn new(overscaled_z: u8, canonical: TileId) -> Self {
        debug_assert!(overscaled_z >= canonical.z);
        Self { overscaled_z, canonical }
    }

    /// Display scale relative to the canonical tile (1 when not overscaled).
    ///
    /// Saturates at `u32::MAX` for zoom differences of 32 or more.
    pub fn overscale_factor(&self) -> u32 {
        let levels = u32::from(self.overscaled_z.saturating_sub(self.canonical.z));
        1u32.checked_shl(levels).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for OverscaledTileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (z{})", self.canonical, self.overscaled_z)
    }
}

#[cfg(test)]
#[path = "tile_id_tests.rs"]
mod tests;
