//! Game state and core simulation types
//!
//! All mutable simulation state lives here: the player, the static obstacle
//! set, and the scroll camera, owned together by [`World`] for the duration
//! of one level session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::mask::CollisionMask;
use super::rect::Rect;
use super::sprite::{
    self, Drawable, Facing, FirePhase, FireSprites, FrameHandle, PlayerAnimation, PlayerSprites,
    SheetId,
};
use crate::consts::{ANIMATION_DELAY, COOLDOWN_TIME_MS, FALL_ANIM_THRESHOLD, FPS, GRAVITY,
    JUMP_SPEED, PLAYER_START_LIVES};

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World-space bounding box; size tracks the current frame's mask
    pub rect: Rect,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub facing: Facing,
    /// Airborne jumps used: 0 = grounded, 1 = single jump, 2 = double jump
    pub jump_count: u32,
    /// Ticks since last grounded (or since the double jump); drives the
    /// gravity ramp
    pub fall_count: u32,
    pub lives: u32,
    /// Inside the post-hit invulnerability window
    pub hit: bool,
    /// Timestamp (ms) of the last applied hit, `None` before any damage
    pub hit_cooldown_started_at: Option<u64>,
    /// Free-running sub-frame counter
    pub animation_count: u32,
    /// Animation selected by the last [`Player::update_sprite`]
    pub animation: PlayerAnimation,
    /// Frame chosen by the last [`Player::update_sprite`]
    frame: usize,
    sprites: PlayerSprites,
}

impl Player {
    pub fn new(x: f32, y: f32, sprites: PlayerSprites) -> Self {
        let first = sprites.set(PlayerAnimation::Idle, Facing::Left).mask(0);
        let rect = Rect::new(x, y, first.width() as f32, first.height() as f32);
        Self {
            rect,
            vel: Vec2::ZERO,
            facing: Facing::Left,
            jump_count: 0,
            fall_count: 0,
            lives: PLAYER_START_LIVES,
            hit: false,
            hit_cooldown_started_at: None,
            animation_count: 0,
            animation: PlayerAnimation::Idle,
            frame: 0,
            sprites,
        }
    }

    /// Integrate the gravity ramp and advance the airborne tick count
    ///
    /// Acceleration grows with time spent airborne, clamped to one `GRAVITY`
    /// unit per tick. The count itself is unbounded.
    pub fn apply_gravity(&mut self) {
        self.vel.y += (self.fall_count as f32 / FPS as f32 * GRAVITY).min(1.0);
        self.fall_count += 1;
    }

    /// Launch a jump
    ///
    /// The second airborne call is the double jump and restarts the gravity
    /// ramp, briefly suspending the accumulated fall acceleration. Callers
    /// gate on `jump_count <= 1`; this method does not re-check.
    pub fn jump(&mut self) {
        self.vel.y = -JUMP_SPEED;
        self.jump_count += 1;
        if self.jump_count == 2 {
            self.fall_count = 0;
        }
    }

    /// Downward collision: kill vertical motion, restore both jumps
    pub fn landed(&mut self) {
        self.vel.y = 0.0;
        self.fall_count = 0;
        self.jump_count = 0;
    }

    /// Upward collision: vertical velocity reflects off the ceiling rather
    /// than zeroing (shipped behavior, pending product confirmation)
    pub fn bump_head(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn run_left(&mut self, speed: f32) {
        self.vel.x = -speed;
        self.facing = Facing::Left;
    }

    pub fn run_right(&mut self, speed: f32) {
        self.vel.x = speed;
        self.facing = Facing::Right;
    }

    /// Apply damage if the cooldown window has elapsed
    ///
    /// Returns whether damage was applied. Lives saturate at zero; what death
    /// means is the orchestrator's decision, not this method's.
    pub fn make_hit(&mut self, now_ms: u64) -> bool {
        let off_cooldown = self
            .hit_cooldown_started_at
            .is_none_or(|started| now_ms - started > COOLDOWN_TIME_MS);
        if !off_cooldown {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.hit_cooldown_started_at = Some(now_ms);
        true
    }

    /// Refresh the hit flag: set for exactly the cooldown window after a hit
    pub fn update_hit(&mut self, now_ms: u64) {
        self.hit = self
            .hit_cooldown_started_at
            .is_some_and(|started| now_ms - started < COOLDOWN_TIME_MS);
    }

    /// Select this tick's animation and advance the sub-frame counter
    ///
    /// Priority: hit overrides everything; then ascending states by jump
    /// count, fast falls, running, idle. The counter free-runs across
    /// transitions, so switching states keeps the sub-frame phase.
    pub fn update_sprite(&mut self) {
        self.animation = if self.hit {
            PlayerAnimation::Hit
        } else if self.vel.y < 0.0 {
            match self.jump_count {
                1 => PlayerAnimation::Jump,
                2 => PlayerAnimation::DoubleJump,
                _ => PlayerAnimation::Idle,
            }
        } else if self.vel.y > FALL_ANIM_THRESHOLD {
            PlayerAnimation::Fall
        } else if self.vel.x != 0.0 {
            PlayerAnimation::Run
        } else {
            PlayerAnimation::Idle
        };

        let set = self.sprites.set(self.animation, self.facing);
        self.frame = sprite::frame_index(self.animation_count, set.len());
        self.animation_count += 1;

        // The bounding box adopts the displayed frame's dimensions
        let mask = set.mask(self.frame);
        self.rect.set_size(mask.width() as f32, mask.height() as f32);
    }

    /// Coverage mask of the frame currently shown; collision always tests
    /// against the displayed silhouette
    pub fn current_mask(&self) -> &CollisionMask {
        self.sprites.set(self.animation, self.facing).mask(self.frame)
    }
}

impl Drawable for Player {
    fn world_rect(&self) -> Rect {
        self.rect
    }

    fn frame(&self) -> FrameHandle {
        FrameHandle {
            sheet: SheetId::Player(self.animation, self.facing),
            frame: self.frame,
        }
    }
}

/// An animated fire trap
///
/// Never moves; its coverage mask tracks the currently displayed frame so
/// contact damage matches what the player sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireTrap {
    pub phase: FirePhase,
    animation_count: u32,
    frame: usize,
    sprites: FireSprites,
}

impl FireTrap {
    pub fn new(sprites: FireSprites) -> Self {
        Self {
            phase: FirePhase::Off,
            animation_count: 0,
            frame: 0,
            sprites,
        }
    }

    pub fn set_on(&mut self) {
        self.phase = FirePhase::On;
    }

    pub fn set_off(&mut self) {
        self.phase = FirePhase::Off;
    }

    /// Advance the current animation by one tick
    ///
    /// The counter resets after a full cycle so it stays bounded.
    pub fn step(&mut self) {
        let len = self.sprites.set(self.phase).len();
        self.frame = sprite::frame_index(self.animation_count, len);
        self.animation_count += 1;
        if (self.animation_count / ANIMATION_DELAY) as usize == len {
            self.animation_count = 0;
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn current_mask(&self) -> &CollisionMask {
        self.sprites.set(self.phase).mask(self.frame)
    }
}

/// What a static obstacle is made of
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Plain terrain with a fixed silhouette
    Solid { mask: CollisionMask },
    /// A fire trap; its mask comes from the running animation
    Fire(FireTrap),
}

/// One piece of static level geometry
///
/// Position and kind are immutable after level construction; only a fire's
/// animation state mutates, through [`World::step_hazards`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn solid(rect: Rect, mask: CollisionMask) -> Self {
        debug_assert_eq!(mask.width() as f32, rect.w, "mask width mismatch");
        debug_assert_eq!(mask.height() as f32, rect.h, "mask height mismatch");
        Self {
            rect,
            kind: ObstacleKind::Solid { mask },
        }
    }

    /// A fire trap at (x, y), sized from its off frame
    pub fn fire(x: f32, y: f32, sprites: FireSprites) -> Self {
        let first = sprites.off.mask(0);
        let rect = Rect::new(x, y, first.width() as f32, first.height() as f32);
        Self {
            rect,
            kind: ObstacleKind::Fire(FireTrap::new(sprites)),
        }
    }

    /// Coverage mask for collision this tick
    pub fn mask(&self) -> &CollisionMask {
        match &self.kind {
            ObstacleKind::Solid { mask } => mask,
            ObstacleKind::Fire(trap) => trap.current_mask(),
        }
    }

    /// Contact with this obstacle damages the player
    pub fn is_hazard(&self) -> bool {
        matches!(self.kind, ObstacleKind::Fire(_))
    }
}

impl Drawable for Obstacle {
    fn world_rect(&self) -> Rect {
        self.rect
    }

    fn frame(&self) -> FrameHandle {
        match &self.kind {
            ObstacleKind::Solid { .. } => FrameHandle {
                sheet: SheetId::Terrain,
                frame: 0,
            },
            ObstacleKind::Fire(trap) => FrameHandle {
                sheet: SheetId::Fire(trap.phase),
                frame: trap.frame(),
            },
        }
    }
}

/// Complete state of one level session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    /// Static geometry; iteration order is the collision tie-break order
    pub obstacles: Vec<Obstacle>,
    pub camera: Camera,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    pub fn new(player: Player, obstacles: Vec<Obstacle>) -> Self {
        Self {
            player,
            obstacles,
            camera: Camera::default(),
            time_ticks: 0,
        }
    }

    /// Switch every fire on and advance its animation one tick
    ///
    /// The stock layout runs its traps permanently lit; `set_off` remains
    /// reachable for layouts that pulse them.
    pub fn step_hazards(&mut self) {
        for obstacle in &mut self.obstacles {
            if let ObstacleKind::Fire(trap) = &mut obstacle.kind {
                trap.set_on();
                trap.step();
            }
        }
    }
}
