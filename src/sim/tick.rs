//! Fixed timestep simulation tick.
//!
//! One call advances the world by one 60 Hz frame. Input arrives as a
//! per-tick snapshot, so the simulation stays decoupled from whatever
//! input library the shell uses, and identical input sequences replay to
//! identical worlds.

use glam::Vec2;

use crate::consts::*;

use super::collision;
use super::error::WorldError;
use super::state::{GameEvent, Player, World};

/// Logical button states sampled once per tick. The shell may fold several
/// physical keys into one button (e.g. both Space and Up meaning jump).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the world by one tick.
///
/// Errors only surface from level loads triggered by an exit touch or a
/// post-death restart; the rest of the tick is infallible.
pub fn tick(world: &mut World, input: &TickInput) -> Result<(), WorldError> {
    if world.end {
        // Terminal: the session is won and the world is frozen.
        return Ok(());
    }

    update_player(world, input)?;

    for enemy in &mut world.enemies {
        enemy.step();
    }

    Ok(())
}

fn update_player(world: &mut World, input: &TickInput) -> Result<(), WorldError> {
    if !world.player.alive {
        // The ghost drifts toward the top of the screen and holds there.
        // No movement, gravity or collision while dead.
        if world.player.rect.y > GHOST_CEILING_Y {
            world.player.rect.y -= GHOST_RISE;
        }
        if input.jump {
            world.advance_level(true)?;
            world.player.alive = true;
            world.player.vel = Vec2::ZERO;
            world.player.airborne = true;
        }
        return Ok(());
    }

    // Horizontal intent. Right is checked last and wins when both are held.
    let mut move_x = 0.0;
    if input.left {
        move_x = -MOVE_SPEED;
        world.player.facing = -1;
    }
    if input.right {
        move_x = MOVE_SPEED;
        world.player.facing = 1;
    }

    // Jumping fires on every tick the button is held while grounded; the
    // airborne flag is what keeps a held key from re-triggering before the
    // next landing.
    if input.jump && !world.player.airborne {
        world.player.airborne = true;
        world.player.vel.y = JUMP_IMPULSE;
        world.events.push(GameEvent::Jump);
    }

    advance_walk_cycle(&mut world.player, move_x);

    let player_rect = world.player.rect;

    // Exit first: the rest of the tick would run against the old level's
    // rects, so start clean on the new one instead.
    if world.exits.iter().any(|door| door.rect.overlaps(&player_rect)) {
        world.events.push(GameEvent::LevelComplete);
        world.advance_level(false)?;
        return Ok(());
    }

    // Coins: sweep out everything touched, then score it. Removals are
    // collected by the retain pass rather than done mid-iteration.
    let mut collected = 0u32;
    world.coins.retain(|coin| {
        let hit = coin.rect.overlaps(&player_rect);
        if hit {
            collected += 1;
        }
        !hit
    });
    for _ in 0..collected {
        world.player.score += 1;
        world.events.push(GameEvent::CoinCollected);
    }
    world.high_score = world.high_score.max(world.player.score);

    // Stomp scan runs before the kill scan so a squashed enemy cannot also
    // kill in the same tick. Stomping requires downward motion with the
    // player's feet above the enemy's midline.
    let falling = world.player.vel.y > 0.0;
    let feet = player_rect.bottom();
    let mut stomped = 0usize;
    world.enemies.retain(|enemy| {
        let squash =
            falling && enemy.rect.overlaps(&player_rect) && feet < enemy.rect.center_y();
        if squash {
            stomped += 1;
        }
        !squash
    });
    if stomped > 0 {
        world.player.airborne = true;
        world.player.vel.y = STOMP_BOUNCE;
        world.events.push(GameEvent::Stomped);
    }

    // Anything still overlapping is lethal.
    let touched_enemy = world
        .enemies
        .iter()
        .any(|enemy| enemy.rect.overlaps(&player_rect));
    let touched_lava = world
        .lava
        .iter()
        .any(|lava| lava.rect.overlaps(&player_rect));
    if touched_enemy || touched_lava {
        world.player.alive = false;
        world.player.score = 0;
        world.events.push(GameEvent::Died);
        log::info!("player died on level {}", world.level);
    }

    // Axis-separated tile resolution, X before Y.
    let move_x = collision::resolve_horizontal(&world.player.rect, move_x, &world.tiles);
    let vertical =
        collision::resolve_vertical(&mut world.player.rect, world.player.vel.y, &world.tiles);
    world.player.vel.y = vertical.vel_y;
    if vertical.landed {
        world.player.airborne = false;
    }

    world.player.vel.x = move_x;
    world.player.rect.x += move_x;
    world.player.rect.y += world.player.vel.y;
    // Gravity accrues even on the tick we landed; it is next tick's pull.
    world.player.vel.y += GRAVITY;

    Ok(())
}

/// Advance the walk animation while there is horizontal input; idle resets
/// the pose to the first frame without disturbing the cadence counter.
fn advance_walk_cycle(player: &mut Player, move_x: f32) {
    if move_x != 0.0 {
        player.walk_timer += 1;
        if player.walk_timer >= WALK_COOLDOWN {
            player.walk_timer = 0;
            player.frame = (player.frame + 1) % WALK_FRAMES;
        }
    } else {
        player.frame = 0;
    }
}
