/// Covering tiles — selects the tiles to draw for the current camera.
///
/// Walks a quadtree of tile boxes from zoom 0 down to `max_zoom`, pruning
/// subtrees the camera frustum cannot see and stopping early (at a lower
/// zoom) for tiles far from the view center. Once a node is `Full`, its
/// descendants are accepted without further frustum tests.

use std::ops::RangeInclusive;
use glam::{DVec2, DVec3};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::geometry::{Aabb, Frustum, IntersectResult};
use super::tile_id::{OverscaledTileId, TileId};

const SOURCE: &str = "tilemap::TileCover";

/// Highest zoom level the traversal accepts
pub const MAX_TILE_ZOOM: u8 = 30;

/// Parameters of one covering-tiles query.
///
/// `center` is the view center in tile units at `max_zoom`
/// (`2^max_zoom * world_position / world_size`).
#[derive(Debug, Clone, PartialEq)]
pub struct CoveringTilesOptions {
    /// Tiles are never emitted below this zoom
    pub min_zoom: u8,
    /// Deepest zoom level of the tile pyramid
    pub max_zoom: u8,
    /// Display zoom reported for tiles emitted at `max_zoom`
    pub overscaled_zoom: u8,
    /// View center in `max_zoom` tile units
    pub center: DVec2,
    /// Radius (in `max_zoom` tiles) around the center kept at full detail
    pub radius_of_max_lod_in_tiles: f64,
    /// World copies to cover (0 = primary world)
    pub world_copies: RangeInclusive<i32>,
}

impl Default for CoveringTilesOptions {
    fn default() -> Self {
        Self {
            min_zoom: 0,
            max_zoom: 0,
            overscaled_zoom: 0,
            center: DVec2::new(0.5, 0.5),
            radius_of_max_lod_in_tiles: 3.0,
            world_copies: 0..=0,
        }
    }
}

impl CoveringTilesOptions {
    /// Check the options are consistent.
    pub fn validate(&self) -> Result<()> {
        if self.max_zoom > MAX_TILE_ZOOM {
            return Err(Error::InvalidParameter(format!(
                "max_zoom {} exceeds {}",
                self.max_zoom, MAX_TILE_ZOOM
            )));
        }
        if self.min_zoom > self.max_zoom {
            return Err(Error::InvalidParameter(format!(
                "min_zoom {} > max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.overscaled_zoom > MAX_TILE_ZOOM {
            return Err(Error::InvalidParameter(format!(
                "overscaled_zoom {} exceeds {}",
                self.overscaled_zoom, MAX_TILE_ZOOM
            )));
        }
        if self.overscaled_zoom < self.max_zoom {
            return Err(Error::InvalidParameter(format!(
                "overscaled_zoom {} < max_zoom {}",
                self.overscaled_zoom, self.max_zoom
            )));
        }
        if !self.center.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "center {:?} is not finite",
                self.center
            )));
        }
        if !(self.radius_of_max_lod_in_tiles >= 0.0 && self.radius_of_max_lod_in_tiles.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "radius_of_max_lod_in_tiles {} must be finite and >= 0",
                self.radius_of_max_lod_in_tiles
            )));
        }
        if self.world_copies.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "world_copies {:?} is empty",
                self.world_copies
            )));
        }
        Ok(())
    }
}

/// Traversal node: a tile box and whether an ancestor was fully visible
struct Node {
    aabb: Aabb,
    tile: TileId,
    fully_visible: bool,
}

/// Compute the tiles covering `frustum`, nearest to `options.center` first.
///
/// `frustum` must be expressed in `max_zoom` tile units, i.e. built with
/// `Frustum::from_inverse_projection(inv_proj, world_size, max_zoom)`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `options` fail validation.
pub fn covering_tiles(
    frustum: &Frustum,
    options: &CoveringTilesOptions,
) -> Result<Vec<OverscaledTileId>> {
    options
        .validate()
        .map_err(|e| Engine::log_and_return_error(SOURCE, e))?;

    if !frustum.planes.iter().all(|plane| plane.is_finite()) {
        crate::engine_warn!(SOURCE, "Frustum has non-finite planes, no tile can be visible");
    }

    let max_zoom = options.max_zoom;
    let num_tiles = f64::from(max_zoom).exp2();
    let center = options.center;

    let mut stack: Vec<Node> = options
        .world_copies
        .clone()
        .map(|wrap| {
            let offset = f64::from(wrap) * num_tiles;
            Node {
                aabb: Aabb::new(
                    DVec3::new(offset, 0.0, 0.0),
                    DVec3::new(offset + num_tiles, num_tiles, 0.0),
                ),
                tile: TileId::new(0, 0, 0, wrap),
                fully_visible: false,
            }
        })
        .collect();

    let mut selected: Vec<(OverscaledTileId, f64)> = Vec::new();

    while let Some(mut node) = stack.pop() {
        if !node.fully_visible {
            match node.aabb.intersects_frustum(frustum) {
                IntersectResult::None => continue,
                IntersectResult::Full => node.fully_visible = true,
                IntersectResult::Partial => {}
            }
        }

        let zoom = node.tile.z;
        let distance_x = node.aabb.distance_x(center);
        let distance_y = node.aabb.distance_y(center);
        let longest_dim = distance_x.abs().max(distance_y.abs());
        let dist_to_split =
            options.radius_of_max_lod_in_tiles + f64::from(max_zoom - zoom).exp2() - 2.0;

        if zoom == max_zoom || (longest_dim > dist_to_split && zoom >= options.min_zoom) {
            let overscaled_z = if zoom == max_zoom { options.overscaled_zoom } else { zoom };
            let distance_sq = squared_distance_to_tile(center, &node.tile, max_zoom, num_tiles);
            selected.push((OverscaledTileId::new(overscaled_z, node.tile), distance_sq));
            continue;
        }

        for (i, child) in node.tile.children().into_iter().enumerate() {
            stack.push(Node {
                aabb: node.aabb.quadrant(i),
                tile: child,
                fully_visible: node.fully_visible,
            });
        }
    }

    // Stable: equidistant tiles keep traversal order
    selected.sort_by(|a, b| a.1.total_cmp(&b.1));

    crate::engine_debug!(
        SOURCE,
        "{} tiles selected (zoom {}..={}, {} world copies)",
        selected.len(),
        options.min_zoom,
        max_zoom,
        options.world_copies.clone().count()
    );

    Ok(selected.into_iter().map(|(id, _)| id).collect())
}

/// Squared distance from `center` to the tile center, in `max_zoom` tile units
fn squared_distance_to_tile(center: DVec2, tile: &TileId, max_zoom: u8, num_tiles: f64) -> f64 {
    let scale = f64::from(max_zoom - tile.z).exp2();
    let tile_center = DVec2::new(
        (f64::from(tile.x) + 0.5) * scale + f64::from(tile.wrap) * num_tiles,
        (f64::from(tile.y) + 0.5) * scale,
    );
    center.distance_squared(tile_center)
}

#[cfg(test)]
#[path = "covering_tiles_tests.rs"]
mod tests;
