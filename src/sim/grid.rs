//! Level grids and the grid-to-spawn mapping.
//!
//! A level is a small character matrix: each cell covers one tile-sized slot
//! and a single character picks what spawns there. Anything outside the
//! legend is empty space, and rows may be ragged (missing columns read as
//! empty).
//!
//! Legend: `1` ground tile, `X` exit door, `P` player start, `L` lava,
//! `E` enemy, `C` coin.

use crate::cell_origin;
use crate::consts::*;

use super::error::LevelLoadError;

/// Typed spawn descriptor produced by the loader.
///
/// Coordinates are pixel anchors: `left`/`bottom` for things that stand in
/// their cell, `left`/`top` for the exit (which is two tiles tall and hangs
/// above its cell) and for the coin (a half-tile square centered in its
/// cell).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spawn {
    Tile { left: f32, bottom: f32 },
    Exit { left: f32, top: f32 },
    PlayerStart { left: f32, bottom: f32 },
    Lava { left: f32, bottom: f32 },
    Enemy { left: f32, bottom: f32 },
    Coin { left: f32, top: f32 },
}

const LEVEL_1: &str = "\
..................
..................
..................
..................
..................
..................
..................
.......C.C........
......11111.......
.....1.......X....
.P..11..E....111..
111111111111111111";

const LEVEL_2: &str = "\
..................
..................
..................
..................
..................
..................
..................
..................
....C.......C.....
..................
.P..1.E..E..1...X.
1111LL11111LL11111";

const LEVEL_3: &str = "\
..................
..................
..................
....C.............
....111..C........
........111.....X.
......1.....111111
.....1............
....1.............
...1..............
.P1......E....E...
111111111111111111";

const LEVEL_4: &str = "\
..................
..................
..................
..................
..................
..................
..................
..................
..................
......C.....C.....
.P.E..11.E.....X..
11111LLLL111LL1111";

const LEVEL_5: &str = "\
..................
..................
.X.C..............
.111..............
....1.C...........
....111...........
.......1..........
........1.........
.........1........
..........1.......
...........1.1.E.P
111111LL1111LL1111";

const LEVELS: [&str; MAX_LEVEL as usize] = [LEVEL_1, LEVEL_2, LEVEL_3, LEVEL_4, LEVEL_5];

/// Grid rows for a level, by 1-based index.
fn rows(level: u32) -> Result<&'static str, LevelLoadError> {
    level
        .checked_sub(1)
        .and_then(|i| LEVELS.get(i as usize))
        .copied()
        .ok_or(LevelLoadError::UnknownLevel(level))
}

/// Map a level's grid to spawn descriptors.
pub fn load_level(level: u32) -> Result<Vec<Spawn>, LevelLoadError> {
    let spawns = parse_grid(rows(level)?);
    log::debug!("level {level}: {} spawns", spawns.len());
    Ok(spawns)
}

/// Walk a grid row by row and emit one spawn per recognized code.
pub(crate) fn parse_grid(grid: &str) -> Vec<Spawn> {
    let mut spawns = Vec::new();
    for (row, line) in grid.lines().enumerate() {
        for (col, code) in line.chars().enumerate() {
            let origin = cell_origin(col, row);
            let spawn = match code {
                '1' => Spawn::Tile {
                    left: origin.x,
                    bottom: origin.y + TILE_SIZE,
                },
                'X' => Spawn::Exit {
                    left: origin.x,
                    top: origin.y - TILE_SIZE,
                },
                'P' => Spawn::PlayerStart {
                    left: origin.x,
                    bottom: origin.y + TILE_SIZE,
                },
                'L' => Spawn::Lava {
                    left: origin.x,
                    bottom: origin.y + TILE_SIZE,
                },
                'E' => Spawn::Enemy {
                    left: origin.x,
                    bottom: origin.y + TILE_SIZE,
                },
                'C' => Spawn::Coin {
                    left: origin.x + TILE_SIZE / 4.0,
                    top: origin.y + TILE_SIZE / 4.0,
                },
                _ => continue,
            };
            spawns.push(spawn);
        }
    }
    spawns
}
