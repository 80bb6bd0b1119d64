//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Logical time passed in once per tick, never re-sampled
//! - Stable iteration order (obstacle collection order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod mask;
pub mod rect;
pub mod sprite;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{horizontal_blocker, resolve_vertical};
pub use mask::{CollisionMask, masks_collide};
pub use rect::Rect;
pub use sprite::{
    Drawable, Facing, FirePhase, FireSprites, FrameHandle, FrameSet, PlayerAnimation,
    PlayerSprites, SheetId, frame_index,
};
pub use state::{FireTrap, Obstacle, ObstacleKind, Player, World};
pub use tick::{GameEvent, TickInput, tick};
