//! Grasslands - a tile-based side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, mask collision, game state)
//! - `session`: Explicit session state machine (menu, playing, game over)
//! - `level`: Level data provider (built-in demo layout, JSON specs)

pub mod level;
pub mod session;
pub mod sim;

pub use level::LevelSpec;
pub use session::{Session, SessionPhase};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const FPS: u32 = 60;

    /// Viewport dimensions used by the scroll controller
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Horizontal run speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Gravity ramp unit (pixels per tick squared)
    pub const GRAVITY: f32 = 1.0;
    /// Upward speed applied on jump
    pub const JUMP_SPEED: f32 = GRAVITY * 8.0;
    /// Lives at level start
    pub const PLAYER_START_LIVES: u32 = 4;

    /// Ticks each animation frame stays on screen
    pub const ANIMATION_DELAY: u32 = 3;
    /// Damage cooldown and hit-flash window (milliseconds)
    pub const COOLDOWN_TIME_MS: u64 = 1000;
    /// Downward speed past which the fall animation takes over
    pub const FALL_ANIM_THRESHOLD: f32 = GRAVITY * 2.0;

    /// Camera follow margins (pixels from the viewport edge)
    pub const SCROLL_MARGIN_X: f32 = 200.0;
    pub const SCROLL_MARGIN_Y: f32 = 150.0;
    /// Minimum fall speed before the camera follows downward
    pub const CAMERA_FALL_GATE: f32 = 0.7;

    /// Terrain tile edge length (pixels)
    pub const TILE_SIZE: f32 = 96.0;
    /// Alpha value above which a pixel counts as solid in a collision mask
    pub const MASK_ALPHA_THRESHOLD: u8 = 127;
}
