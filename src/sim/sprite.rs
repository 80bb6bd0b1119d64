//! Animation frame sets and draw handles
//!
//! The asset collaborator hands the simulation frame counts and a coverage
//! mask per frame; pixel data never enters the core. Renderers get back
//! opaque [`FrameHandle`]s and map them onto real images.

use serde::{Deserialize, Serialize};

use super::mask::CollisionMask;
use super::rect::Rect;
use crate::consts::ANIMATION_DELAY;

/// Ordered frames of one animation, as coverage masks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSet {
    masks: Vec<CollisionMask>,
}

impl FrameSet {
    /// At least one frame is required
    pub fn new(masks: Vec<CollisionMask>) -> Self {
        debug_assert!(!masks.is_empty(), "animation needs at least one frame");
        Self { masks }
    }

    /// Identical fully-solid frames; placeholder for the headless shell and
    /// tests, where no real silhouettes exist
    pub fn uniform(frames: usize, width: u32, height: u32) -> Self {
        Self::new(vec![CollisionMask::filled(width, height); frames])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    #[inline]
    pub fn mask(&self, frame: usize) -> &CollisionMask {
        &self.masks[frame]
    }
}

/// Sub-frame arithmetic shared by every animated entity
#[inline]
pub fn frame_index(animation_count: u32, len: usize) -> usize {
    (animation_count / ANIMATION_DELAY) as usize % len
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Sheet-name suffix as the asset pack spells it
    pub fn suffix(&self) -> &'static str {
        match self {
            Facing::Left => "_left",
            Facing::Right => "_right",
        }
    }
}

/// Semantic animation states of the player sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAnimation {
    Idle,
    Run,
    Jump,
    DoubleJump,
    Fall,
    Hit,
}

impl PlayerAnimation {
    pub const ALL: [PlayerAnimation; 6] = [
        PlayerAnimation::Idle,
        PlayerAnimation::Run,
        PlayerAnimation::Jump,
        PlayerAnimation::DoubleJump,
        PlayerAnimation::Fall,
        PlayerAnimation::Hit,
    ];

    /// Sheet name as the asset pack spells it
    pub fn sheet_name(&self) -> &'static str {
        match self {
            PlayerAnimation::Idle => "idle",
            PlayerAnimation::Run => "run",
            PlayerAnimation::Jump => "jump",
            PlayerAnimation::DoubleJump => "double_jump",
            PlayerAnimation::Fall => "fall",
            PlayerAnimation::Hit => "hit",
        }
    }

    /// Frame counts of the bundled character's sheets
    pub fn stock_frame_count(&self) -> usize {
        match self {
            PlayerAnimation::Idle => 11,
            PlayerAnimation::Run => 12,
            PlayerAnimation::Jump => 1,
            PlayerAnimation::DoubleJump => 6,
            PlayerAnimation::Fall => 1,
            PlayerAnimation::Hit => 7,
        }
    }
}

/// One frame set per (animation, facing) pair
///
/// Flat-indexed animation-major, `Left` before `Right`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSprites {
    sets: Vec<FrameSet>,
}

impl PlayerSprites {
    pub fn new(sets: Vec<FrameSet>) -> Self {
        debug_assert_eq!(sets.len(), PlayerAnimation::ALL.len() * 2, "sheet count mismatch");
        Self { sets }
    }

    /// One filled frame per sheet (collision-focused tests)
    pub fn uniform(width: u32, height: u32) -> Self {
        let sets = (0..PlayerAnimation::ALL.len() * 2)
            .map(|_| FrameSet::uniform(1, width, height))
            .collect();
        Self { sets }
    }

    /// Placeholder sheets at the bundled character's frame counts
    pub fn placeholder() -> Self {
        let sets = PlayerAnimation::ALL
            .iter()
            .flat_map(|animation| {
                let frames = animation.stock_frame_count();
                [
                    FrameSet::uniform(frames, 64, 64),
                    FrameSet::uniform(frames, 64, 64),
                ]
            })
            .collect();
        Self { sets }
    }

    #[inline]
    pub fn set(&self, animation: PlayerAnimation, facing: Facing) -> &FrameSet {
        &self.sets[animation as usize * 2 + facing as usize]
    }
}

/// Fire trap animation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePhase {
    Off,
    On,
}

/// Frame sets for the two fire trap states
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireSprites {
    pub off: FrameSet,
    pub on: FrameSet,
}

impl FireSprites {
    /// Placeholder frames at the bundled trap's counts and size
    pub fn placeholder() -> Self {
        Self {
            off: FrameSet::uniform(1, 32, 64),
            on: FrameSet::uniform(3, 32, 64),
        }
    }

    #[inline]
    pub fn set(&self, phase: FirePhase) -> &FrameSet {
        match phase {
            FirePhase::Off => &self.off,
            FirePhase::On => &self.on,
        }
    }
}

/// Identifies a sprite sheet to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetId {
    Player(PlayerAnimation, Facing),
    Fire(FirePhase),
    Terrain,
}

/// What an entity currently shows; a renderer maps this back to an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle {
    pub sheet: SheetId,
    pub frame: usize,
}

/// Anything a renderer can place on screen
pub trait Drawable {
    fn world_rect(&self) -> Rect;
    fn frame(&self) -> FrameHandle;
}
