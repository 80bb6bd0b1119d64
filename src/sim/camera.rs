//! Scroll-follow camera
//!
//! The camera holds a world-to-screen offset and only follows the player at
//! the viewport periphery, leaving a dead zone in the middle of the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::{CAMERA_FALL_GATE, SCREEN_HEIGHT, SCREEN_WIDTH, SCROLL_MARGIN_X,
    SCROLL_MARGIN_Y};

/// World-to-screen scroll offset
///
/// Only ever pushed in the direction the player is approaching an edge;
/// never implicitly reset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
}

impl Camera {
    /// Follow the player for one tick
    ///
    /// Horizontal follow engages within [`SCROLL_MARGIN_X`] of either edge,
    /// in the direction of travel. Vertical follow is asymmetric: any upward
    /// speed inside the top margin, but downward only past
    /// [`CAMERA_FALL_GATE`] so small bounces don't jitter the view.
    pub fn update(&mut self, player: &Player) {
        let rect = &player.rect;

        let at_right_edge =
            rect.right() - self.offset.x >= SCREEN_WIDTH - SCROLL_MARGIN_X && player.vel.x > 0.0;
        let at_left_edge = rect.left() - self.offset.x <= SCROLL_MARGIN_X && player.vel.x < 0.0;
        if at_right_edge || at_left_edge {
            self.offset.x += player.vel.x;
        }

        if rect.top() - self.offset.y <= SCROLL_MARGIN_Y && player.vel.y < 0.0 {
            self.offset.y += player.vel.y;
        } else if rect.bottom() - self.offset.y >= SCREEN_HEIGHT - SCROLL_MARGIN_Y - rect.h
            && player.vel.y > CAMERA_FALL_GATE
        {
            self.offset.y += player.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::PlayerSprites;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, PlayerSprites::uniform(64, 64))
    }

    #[test]
    fn test_dead_zone_ignores_center_movement() {
        let mut camera = Camera::default();
        let mut player = player_at(400.0, 300.0);
        player.vel.x = 5.0;
        camera.update(&player);
        assert_eq!(camera.offset.x, 0.0);

        player.vel.x = -5.0;
        camera.update(&player);
        assert_eq!(camera.offset.x, 0.0);
    }

    #[test]
    fn test_follows_right_edge_only_when_moving_right() {
        let mut camera = Camera::default();
        // right edge at 664, inside the 200px margin of the 800px viewport
        let mut player = player_at(600.0, 300.0);

        camera.update(&player);
        assert_eq!(camera.offset.x, 0.0);

        player.vel.x = 5.0;
        camera.update(&player);
        assert_eq!(camera.offset.x, 5.0);

        // Moving away from the edge releases the follow
        player.vel.x = -5.0;
        camera.update(&player);
        assert_eq!(camera.offset.x, 5.0);
    }

    #[test]
    fn test_follows_left_edge_with_accumulated_offset() {
        let mut camera = Camera { offset: Vec2::new(500.0, 0.0) };
        // Screen-space left edge: 650 - 500 = 150, inside the margin
        let mut player = player_at(650.0, 300.0);
        player.vel.x = -5.0;
        camera.update(&player);
        assert_eq!(camera.offset.x, 495.0);
    }

    #[test]
    fn test_upward_follow_at_top_margin() {
        let mut camera = Camera::default();
        let mut player = player_at(400.0, 140.0);
        player.vel.y = -8.0;
        camera.update(&player);
        assert_eq!(camera.offset.y, -8.0);
    }

    #[test]
    fn test_downward_follow_gated_on_fall_speed() {
        // bottom at 450 + 64 >= 600 - 150 - 64
        let mut player = player_at(400.0, 450.0);

        let mut camera = Camera::default();
        player.vel.y = 0.5;
        camera.update(&player);
        assert_eq!(camera.offset.y, 0.0);

        player.vel.y = 2.0;
        camera.update(&player);
        assert_eq!(camera.offset.y, 2.0);
    }
}
