//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as a per-tick snapshot
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod error;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{VerticalResolution, resolve_horizontal, resolve_vertical};
pub use error::{InvalidGeometry, LevelLoadError, WorldError};
pub use grid::{Spawn, load_level};
pub use state::{
    Coin, Enemy, ExitDoor, GameEvent, Hud, Lava, Player, Rect, Sprite, SpriteKind, Tile, World,
};
pub use tick::{TickInput, tick};
