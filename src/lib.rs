//! Lava Leap - a tile-based side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `settings`: User preferences
//! - `highscores`: Persistent leaderboard
//!
//! Rendering, audio playback and input polling are external shells: they
//! feed a [`sim::TickInput`] snapshot into [`sim::tick`] once per frame and
//! read back sprites, HUD values and event cues. The simulation itself never
//! touches pixels, sound devices or the keyboard.

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate; the external frame clock drives one tick per frame.
    pub const TICK_HZ: u32 = 60;

    /// Logical screen dimensions the levels are laid out for.
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Pixel length of one grid cell; anchors all grid-to-pixel conversion.
    pub const TILE_SIZE: f32 = 50.0;

    /// Number of levels; clearing the last one wins the session.
    pub const MAX_LEVEL: u32 = 5;

    /// Player hitbox.
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Horizontal run speed (px per tick).
    pub const MOVE_SPEED: f32 = 5.0;
    /// Downward pull added to vertical velocity every tick (px per tick²).
    pub const GRAVITY: f32 = 1.0;
    /// Vertical velocity on takeoff (negative = up).
    pub const JUMP_IMPULSE: f32 = -12.0;
    /// Upward kick after squashing an enemy.
    pub const STOMP_BOUNCE: f32 = -5.0;

    /// Frames in the walk cycle.
    pub const WALK_FRAMES: usize = 4;
    /// Ticks between walk-frame advances.
    pub const WALK_COOLDOWN: u32 = 5;

    /// Enemy patrol speed (px per tick).
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Enemy hitbox.
    pub const ENEMY_WIDTH: f32 = 50.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;

    /// Coin hitbox edge length (half a tile, centered in its cell).
    pub const COIN_SIZE: f32 = TILE_SIZE / 2.0;

    /// Dead players drift up to this screen y and hold there.
    pub const GHOST_CEILING_Y: f32 = 200.0;
    /// Ghost drift speed (px per tick).
    pub const GHOST_RISE: f32 = 5.0;
}

/// Pixel origin (top-left corner) of the grid cell at (col, row).
#[inline]
pub fn cell_origin(col: usize, row: usize) -> Vec2 {
    Vec2::new(
        col as f32 * consts::TILE_SIZE,
        row as f32 * consts::TILE_SIZE,
    )
}
