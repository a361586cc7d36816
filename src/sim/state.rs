//! World state and entity kinds.
//!
//! The entity set is closed: a fixed handful of structs rather than an open
//! trait hierarchy, since the game knows every kind it will ever spawn.
//! Everything is serializable so a shell can snapshot and restore a session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::error::{InvalidGeometry, WorldError};
use super::grid::{self, Spawn};

/// Axis-aligned rectangle in pixel units, y-down (gravity is positive y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Width and height must be strictly positive.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Result<Self, InvalidGeometry> {
        if w <= 0.0 || h <= 0.0 {
            return Err(InvalidGeometry {
                width: w,
                height: h,
            });
        }
        Ok(Self { x, y, w, h })
    }

    /// Rect whose bottom-left corner sits at (left, bottom).
    pub fn from_bottom_left(
        left: f32,
        bottom: f32,
        w: f32,
        h: f32,
    ) -> Result<Self, InvalidGeometry> {
        Self::new(left, bottom - h, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// The same rect displaced by (dx, dy).
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Strict AABB overlap; rects that merely touch along an edge do not
    /// count, so a body resting flush on a surface is not colliding with it.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Solid ground. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub rect: Rect,
}

/// Touching lava kills outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lava {
    pub rect: Rect,
}

/// A collectible worth one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
}

/// Touching the door finishes the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExitDoor {
    pub rect: Rect,
}

/// Patrolling enemy: walks at constant speed, reversing after one tile
/// width of travel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: f32,
    /// -1 walking left, 1 walking right.
    pub dir: f32,
    /// Distance covered since the last reversal.
    pub traveled: f32,
}

impl Enemy {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            speed: ENEMY_SPEED,
            dir: 1.0,
            traveled: 0.0,
        }
    }

    /// One patrol step. Enemies ignore tiles: the patrol range is a
    /// level-design contract, not a physical one.
    pub fn step(&mut self) {
        self.rect.x += self.speed * self.dir;
        self.traveled += self.speed;
        if self.traveled >= TILE_SIZE {
            self.traveled = 0.0;
            self.dir = -self.dir;
        }
    }
}

/// The controllable character. One instance exists for the whole session;
/// level loads reposition it rather than replacing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Per-tick displacement: x is the resolved horizontal move for the
    /// tick, y the vertical velocity carried across ticks.
    pub vel: Vec2,
    /// True while mid-air; jumping is only allowed when this is false.
    pub airborne: bool,
    /// -1 facing left, 1 facing right, 0 before the first move (renders
    /// right).
    pub facing: i8,
    pub alive: bool,
    pub score: u32,
    /// Walk-cycle frame in `[0, WALK_FRAMES)`.
    pub frame: usize,
    /// Ticks of horizontal input since the last frame advance.
    pub walk_timer: u32,
}

impl Player {
    pub fn new() -> Result<Self, InvalidGeometry> {
        Ok(Self {
            rect: Rect::new(0.0, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT)?,
            vel: Vec2::ZERO,
            airborne: true,
            facing: 0,
            alive: true,
            score: 0,
            frame: 0,
            walk_timer: 0,
        })
    }

    /// Relocate so the bottom-left corner sits at (left, bottom). Used by
    /// the `P` grid marker; size and gameplay state are untouched.
    pub fn place_bottom_left(&mut self, left: f32, bottom: f32) {
        self.rect.x = left;
        self.rect.y = bottom - self.rect.h;
    }
}

/// Discrete cues fired during a tick and drained by the audio/presentation
/// shell. Fire-and-forget: the simulation never waits on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    CoinCollected,
    Stomped,
    Died,
    LevelComplete,
    Victory,
}

/// What a drawable should look like this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Tile,
    Lava,
    Enemy,
    Coin,
    Exit,
    /// Live player with walk frame and facing (-1 renders left, otherwise
    /// right).
    Player { frame: usize, facing: i8 },
    /// Dead player drifting upward.
    Ghost,
}

/// Read-only drawable: position, size, visual state. The simulation never
/// touches pixels; a renderer consumes these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: SpriteKind,
}

impl Sprite {
    fn from_rect(rect: &Rect, kind: SpriteKind) -> Self {
        Self {
            pos: Vec2::new(rect.x, rect.y),
            size: Vec2::new(rect.w, rect.h),
            kind,
        }
    }
}

/// Read-only values for the score/HUD collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub alive: bool,
    pub end: bool,
}

/// Complete game state for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Current level, 1-based. May reach `MAX_LEVEL + 1` exactly once, when
    /// the final level is cleared.
    pub level: u32,
    pub tiles: Vec<Tile>,
    pub lava: Vec<Lava>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub exits: Vec<ExitDoor>,
    pub player: Player,
    /// Best score reached this session. Monotone; survives death.
    pub high_score: u32,
    /// Set when the last level has been cleared; gameplay is frozen from
    /// then on.
    pub end: bool,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// Fresh session at level 1.
    pub fn new() -> Result<Self, WorldError> {
        let mut world = Self {
            level: 1,
            tiles: Vec::new(),
            lava: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            exits: Vec::new(),
            player: Player::new()?,
            high_score: 0,
            end: false,
            events: Vec::new(),
        };
        world.populate(grid::load_level(world.level)?)?;
        log::info!("world ready at level {}", world.level);
        Ok(world)
    }

    fn clear_entities(&mut self) {
        self.tiles.clear();
        self.lava.clear();
        self.enemies.clear();
        self.coins.clear();
        self.exits.clear();
    }

    fn populate(&mut self, spawns: Vec<Spawn>) -> Result<(), InvalidGeometry> {
        for spawn in spawns {
            match spawn {
                Spawn::Tile { left, bottom } => self.tiles.push(Tile {
                    rect: Rect::from_bottom_left(left, bottom, TILE_SIZE, TILE_SIZE)?,
                }),
                Spawn::Exit { left, top } => self.exits.push(ExitDoor {
                    rect: Rect::new(left, top, TILE_SIZE, 2.0 * TILE_SIZE)?,
                }),
                Spawn::PlayerStart { left, bottom } => {
                    self.player.place_bottom_left(left, bottom);
                }
                Spawn::Lava { left, bottom } => self.lava.push(Lava {
                    rect: Rect::from_bottom_left(left, bottom, TILE_SIZE, TILE_SIZE / 2.0)?,
                }),
                Spawn::Enemy { left, bottom } => self.enemies.push(Enemy::new(
                    Rect::from_bottom_left(left, bottom, ENEMY_WIDTH, ENEMY_HEIGHT)?,
                )),
                Spawn::Coin { left, top } => self.coins.push(Coin {
                    rect: Rect::new(left, top, COIN_SIZE, COIN_SIZE)?,
                }),
            }
        }
        Ok(())
    }

    /// Tear the current level down and move on: back to level 1 on
    /// `restart`, otherwise to the next level. Past the last level the
    /// world enters its terminal `end` state and no further grids load;
    /// only a fresh session leaves it.
    ///
    /// Score and the alive flag are deliberately untouched here: resetting
    /// them is the death transition's job.
    pub fn advance_level(&mut self, restart: bool) -> Result<(), WorldError> {
        if self.end {
            return Ok(());
        }
        self.clear_entities();
        self.level = if restart { 1 } else { self.level + 1 };
        if self.level > MAX_LEVEL {
            self.end = true;
            self.events.push(GameEvent::Victory);
            log::info!("final level cleared with score {}", self.player.score);
            return Ok(());
        }
        self.populate(grid::load_level(self.level)?)?;
        log::info!(
            "level {} loaded: {} tiles, {} coins, {} enemies, {} lava",
            self.level,
            self.tiles.len(),
            self.coins.len(),
            self.enemies.len(),
            self.lava.len()
        );
        Ok(())
    }

    /// Take all cues fired since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current HUD values.
    pub fn hud(&self) -> Hud {
        Hud {
            level: self.level,
            score: self.player.score,
            high_score: self.high_score,
            alive: self.player.alive,
            end: self.end,
        }
    }

    /// Draw list in back-to-front order.
    pub fn sprites(&self) -> Vec<Sprite> {
        let mut sprites = Vec::with_capacity(
            self.lava.len()
                + self.enemies.len()
                + self.coins.len()
                + self.tiles.len()
                + self.exits.len()
                + 1,
        );
        sprites.extend(
            self.lava
                .iter()
                .map(|l| Sprite::from_rect(&l.rect, SpriteKind::Lava)),
        );
        sprites.extend(
            self.enemies
                .iter()
                .map(|e| Sprite::from_rect(&e.rect, SpriteKind::Enemy)),
        );
        sprites.extend(
            self.coins
                .iter()
                .map(|c| Sprite::from_rect(&c.rect, SpriteKind::Coin)),
        );
        sprites.extend(
            self.tiles
                .iter()
                .map(|t| Sprite::from_rect(&t.rect, SpriteKind::Tile)),
        );
        sprites.extend(
            self.exits
                .iter()
                .map(|x| Sprite::from_rect(&x.rect, SpriteKind::Exit)),
        );
        let player_kind = if self.player.alive {
            SpriteKind::Player {
                frame: self.player.frame,
                facing: self.player.facing,
            }
        } else {
            SpriteKind::Ghost
        };
        sprites.push(Sprite::from_rect(&self.player.rect, player_kind));
        sprites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_rejects_non_positive_dimensions() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect::new(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).is_ok());
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0).unwrap();
        let b = Rect::new(50.0, 0.0, 50.0, 50.0).unwrap();
        let c = Rect::new(49.0, 0.0, 50.0, 50.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn from_bottom_left_places_the_bottom_edge() {
        let r = Rect::from_bottom_left(100.0, 550.0, 50.0, 50.0).unwrap();
        assert_eq!(r.top(), 500.0);
        assert_eq!(r.bottom(), 550.0);
        assert_eq!(r.left(), 100.0);
    }

    #[test]
    fn new_world_is_a_populated_level_one() {
        let world = World::new().unwrap();
        assert_eq!(world.level, 1);
        assert!(!world.end);
        assert!(!world.tiles.is_empty());
        assert!(!world.coins.is_empty());
        assert!(!world.exits.is_empty());
        // The P marker placed the player somewhere inside the level bounds.
        assert!(world.player.rect.x > 0.0);
        assert!(world.player.rect.bottom() <= crate::consts::SCREEN_HEIGHT);
    }

    #[test]
    fn advance_clears_and_repopulates() {
        let mut world = World::new().unwrap();
        world.advance_level(false).unwrap();
        assert_eq!(world.level, 2);
        assert!(!world.end);
        // Exactly the new level's tiles, not leftovers appended to the old.
        let expected = grid::load_level(2)
            .unwrap()
            .iter()
            .filter(|s| matches!(s, Spawn::Tile { .. }))
            .count();
        assert_eq!(world.tiles.len(), expected);
    }

    #[test]
    fn advance_past_last_level_is_terminal() {
        let mut world = World::new().unwrap();
        world.level = MAX_LEVEL;
        world.advance_level(false).unwrap();
        assert!(world.end);
        assert_eq!(world.level, MAX_LEVEL + 1);
        assert!(world.tiles.is_empty());
        assert_eq!(world.drain_events(), vec![GameEvent::Victory]);
    }

    #[test]
    fn restart_goes_back_to_level_one() {
        let mut world = World::new().unwrap();
        world.advance_level(false).unwrap();
        world.advance_level(true).unwrap();
        assert_eq!(world.level, 1);
    }

    #[test]
    fn level_transition_preserves_score_and_alive() {
        let mut world = World::new().unwrap();
        world.player.score = 3;
        world.high_score = 3;
        world.advance_level(false).unwrap();
        assert_eq!(world.player.score, 3);
        assert_eq!(world.high_score, 3);
        assert!(world.player.alive);
    }

    #[test]
    fn enemy_reverses_after_one_tile() {
        let rect = Rect::from_bottom_left(100.0, 550.0, ENEMY_WIDTH, ENEMY_HEIGHT).unwrap();
        let mut enemy = Enemy::new(rect);
        let start_x = enemy.rect.x;
        for _ in 0..TILE_SIZE as usize {
            enemy.step();
        }
        assert_eq!(enemy.dir, -1.0);
        assert_eq!(enemy.traveled, 0.0);
        for _ in 0..TILE_SIZE as usize {
            enemy.step();
        }
        assert_eq!(enemy.dir, 1.0);
        assert_eq!(enemy.rect.x, start_x);
    }

    #[test]
    fn sprites_show_ghost_when_dead() {
        let mut world = World::new().unwrap();
        world.player.alive = false;
        let sprites = world.sprites();
        assert!(sprites.iter().any(|s| s.kind == SpriteKind::Ghost));
        assert!(
            !sprites
                .iter()
                .any(|s| matches!(s.kind, SpriteKind::Player { .. }))
        );
    }

    #[test]
    fn hud_reflects_world_state() {
        let mut world = World::new().unwrap();
        world.player.score = 2;
        world.high_score = 7;
        let hud = world.hud();
        assert_eq!(hud.level, 1);
        assert_eq!(hud.score, 2);
        assert_eq!(hud.high_score, 7);
        assert!(hud.alive);
        assert!(!hud.end);
    }
}
