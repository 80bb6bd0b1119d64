//! Fixed timestep simulation tick
//!
//! One call advances the whole world by a single tick in a fixed order:
//! hazard animation, jump input, gravity, horizontal probes, vertical
//! resolution, hazard damage, animation selection, camera. The logical time
//! for the tick is passed in and never re-sampled.

use super::collision::{horizontal_blocker, resolve_vertical};
use super::state::World;
use crate::consts::PLAYER_SPEED;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Quit requested; consumed by the session shell, not the tick
    pub quit: bool,
    /// Jump pressed this tick (edge, not held)
    pub jump: bool,
    /// Move-left held
    pub move_left: bool,
    /// Move-right held
    pub move_right: bool,
}

/// Discrete events for the audio/visual collaborator
///
/// Emitting never blocks; dropping the returned events is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    DoubleJump,
    /// Damage applied (lives already decremented)
    Hit,
    /// Lives reached zero; the session should end
    Death,
}

/// Advance the world by one fixed tick
///
/// `now_ms` is the logical time for every time-dependent decision this tick.
pub fn tick(world: &mut World, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    world.step_hazards();

    // Jump, gated to at most two airborne jumps
    if input.jump && world.player.jump_count <= 1 {
        world.player.jump();
        events.push(if world.player.jump_count == 2 {
            GameEvent::DoubleJump
        } else {
            GameEvent::Jump
        });
    }

    // Vertical velocity first: the gravity ramp
    world.player.apply_gravity();

    // Horizontal: probe both sides one step early, gate movement, apply
    world.player.vel.x = 0.0;
    let blocked_left = horizontal_blocker(&mut world.player, &world.obstacles, -2.0 * PLAYER_SPEED);
    let blocked_right = horizontal_blocker(&mut world.player, &world.obstacles, 2.0 * PLAYER_SPEED);
    if input.move_left && blocked_left.is_none() {
        world.player.run_left(PLAYER_SPEED);
    }
    if input.move_right && blocked_right.is_none() {
        world.player.run_right(PLAYER_SPEED);
    } else if world.player.rect.left() < 0.0 {
        // Nothing exists past the world's left edge; don't walk off it
        world.player.vel.x = 0.0;
    }
    let dx = world.player.vel.x;
    world.player.rect.translate(dx, 0.0);

    // Vertical: apply the gravity-driven position, then resolve
    let dy = world.player.vel.y;
    world.player.rect.translate(0.0, dy);
    let vertical_hits = resolve_vertical(&mut world.player, &world.obstacles, dy);

    // Hazard contact across both probes and every vertical overlap
    let mut contacts: Vec<usize> = Vec::new();
    contacts.extend(blocked_left);
    contacts.extend(blocked_right);
    contacts.extend(vertical_hits);
    for index in contacts {
        if !world.obstacles[index].is_hazard() || world.player.hit {
            continue;
        }
        let lives_before = world.player.lives;
        if world.player.make_hit(now_ms) {
            events.push(GameEvent::Hit);
            if lives_before > 0 && world.player.lives == 0 {
                events.push(GameEvent::Death);
            }
        }
    }

    world.player.update_hit(now_ms);
    world.player.update_sprite();
    world.camera.update(&world.player);
    world.time_ticks += 1;

    events
}
