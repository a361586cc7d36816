//! Axis-aligned collision resolution against the static tile set.
//!
//! Resolution is axis-separated: the horizontal displacement is tested (and
//! possibly cancelled) against every solid tile, then the vertical
//! displacement is resolved with snap-to-surface. Checks use the proposed
//! displaced rectangle rather than a swept volume, so a displacement larger
//! than one tile per tick can tunnel; per-tick speeds stay below
//! `TILE_SIZE`.

use super::state::{Rect, Tile};

/// Outcome of resolving the vertical displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VerticalResolution {
    /// Remaining vertical velocity (zero after any contact).
    pub vel_y: f32,
    /// Fell onto a tile top; the rect bottom now sits flush on it.
    pub landed: bool,
    /// Rose into a tile bottom; the rect top now sits flush under it.
    pub bumped: bool,
}

/// Cancel `move_x` if the horizontally displaced rect would enter any tile.
/// Full stop against the wall: no sliding, no partial displacement.
pub fn resolve_horizontal(rect: &Rect, move_x: f32, tiles: &[Tile]) -> f32 {
    if move_x == 0.0 {
        return 0.0;
    }
    let probe = rect.translated(move_x, 0.0);
    if tiles.iter().any(|t| t.rect.overlaps(&probe)) {
        0.0
    } else {
        move_x
    }
}

/// Resolve the vertical displacement `vel_y`, snapping `rect` flush to the
/// first obstructing surface and zeroing the velocity.
///
/// Downward motion lands on tile tops; upward (or zero) motion bumps into
/// tile bottoms. The scan continues over the whole tile set so a rect
/// already interpenetrating several tiles settles in a single pass.
pub fn resolve_vertical(rect: &mut Rect, vel_y: f32, tiles: &[Tile]) -> VerticalResolution {
    let mut res = VerticalResolution {
        vel_y,
        ..Default::default()
    };
    for tile in tiles {
        let probe = rect.translated(0.0, res.vel_y);
        if !tile.rect.overlaps(&probe) {
            continue;
        }
        if res.vel_y > 0.0 {
            rect.y += tile.rect.top() - rect.bottom();
            res.landed = true;
        } else {
            rect.y += tile.rect.bottom() - rect.top();
            res.bumped = true;
        }
        res.vel_y = 0.0;
    }
    res
}
