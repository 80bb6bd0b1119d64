//! Axis-separated collision resolution
//!
//! Horizontal and vertical movement resolve independently each tick so the
//! player cannot tunnel diagonally through tile corners. Horizontal motion
//! is gated outright (cancelled when a probe hits); vertical motion snaps to
//! the obstacle edge and feeds back into the player's jump state.

use super::mask::masks_collide;
use super::state::{Obstacle, Player};

/// Probe for an obstacle `dx` pixels to the side
///
/// The player is tentatively shifted, mask-tested against every obstacle in
/// collection order, and shifted back. Callers pass twice the per-tick run
/// speed so a block registers one step early. A `Some` result cancels
/// movement toward that side for this tick; there is no positional
/// resolution on this axis.
pub fn horizontal_blocker(player: &mut Player, obstacles: &[Obstacle], dx: f32) -> Option<usize> {
    player.rect.translate(dx, 0.0);
    let hit = obstacles.iter().position(|obstacle| {
        masks_collide(&player.rect, player.current_mask(), &obstacle.rect, obstacle.mask())
    });
    player.rect.translate(-dx, 0.0);
    hit
}

/// Resolve vertical overlap after gravity moved the player by `dy`
///
/// Falling snaps the player's bottom edge to the obstacle's top and lands;
/// rising snaps the top edge to the obstacle's bottom and bumps. Every
/// overlapping obstacle is reported for hazard checking; when several
/// overlap, the last one in collection order decides the final position.
pub fn resolve_vertical(player: &mut Player, obstacles: &[Obstacle], dy: f32) -> Vec<usize> {
    let mut collided = Vec::new();
    for (index, obstacle) in obstacles.iter().enumerate() {
        if !masks_collide(&player.rect, player.current_mask(), &obstacle.rect, obstacle.mask()) {
            continue;
        }
        if dy > 0.0 {
            player.rect.set_bottom(obstacle.rect.top());
            player.landed();
        } else if dy < 0.0 {
            player.rect.set_top(obstacle.rect.bottom());
            player.bump_head();
        }
        collided.push(index);
    }
    collided
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAYER_SPEED, TILE_SIZE};
    use crate::sim::mask::CollisionMask;
    use crate::sim::rect::Rect;
    use crate::sim::sprite::PlayerSprites;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, PlayerSprites::uniform(10, 10))
    }

    fn tile_at(x: f32, y: f32) -> Obstacle {
        let size = TILE_SIZE as u32;
        Obstacle::solid(
            Rect::new(x, y, TILE_SIZE, TILE_SIZE),
            CollisionMask::filled(size, size),
        )
    }

    #[test]
    fn test_horizontal_blocker_sees_one_step_ahead() {
        // Tile 6px to the right: inside the 2x overshoot, outside one step
        let mut player = player_at(0.0, 0.0);
        let obstacles = vec![tile_at(16.0, 0.0)];

        assert_eq!(
            horizontal_blocker(&mut player, &obstacles, 2.0 * PLAYER_SPEED),
            Some(0)
        );
        assert_eq!(horizontal_blocker(&mut player, &obstacles, -2.0 * PLAYER_SPEED), None);
        // The probe must leave the player where it found it
        assert_eq!(player.rect.x, 0.0);
    }

    #[test]
    fn test_horizontal_blocker_out_of_reach() {
        let mut player = player_at(0.0, 0.0);
        let obstacles = vec![tile_at(30.0, 0.0)];
        assert_eq!(horizontal_blocker(&mut player, &obstacles, 2.0 * PLAYER_SPEED), None);
    }

    #[test]
    fn test_falling_snaps_to_tile_top_and_lands() {
        let mut player = player_at(0.0, 95.0);
        player.vel.y = 6.0;
        player.fall_count = 40;
        player.jump_count = 1;
        let obstacles = vec![tile_at(0.0, 100.0)];

        let hits = resolve_vertical(&mut player, &obstacles, 6.0);
        assert_eq!(hits, [0]);
        assert_eq!(player.rect.bottom(), 100.0);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.fall_count, 0);
        assert_eq!(player.jump_count, 0);
    }

    #[test]
    fn test_rising_snaps_to_tile_bottom_and_bumps() {
        let mut player = player_at(0.0, 190.0);
        player.vel.y = -8.0;
        let obstacles = vec![tile_at(0.0, 100.0)];

        let hits = resolve_vertical(&mut player, &obstacles, -8.0);
        assert_eq!(hits, [0]);
        assert_eq!(player.rect.top(), 196.0);
        // Head bump reflects the upward velocity
        assert_eq!(player.vel.y, 8.0);
    }

    #[test]
    fn test_vertical_reports_all_overlaps_last_snap_wins() {
        // Straddling two tiles whose tops differ by 2px: both report, the
        // second snap decides the final position
        let mut player = player_at(90.0, 95.0);
        player.vel.y = 6.0;
        let obstacles = vec![tile_at(0.0, 102.0), tile_at(96.0, 100.0)];

        let hits = resolve_vertical(&mut player, &obstacles, 6.0);
        assert_eq!(hits, [0, 1]);
        assert_eq!(player.rect.bottom(), 100.0);
    }

    #[test]
    fn test_no_overlap_no_snap() {
        let mut player = player_at(0.0, 0.0);
        player.vel.y = 6.0;
        let obstacles = vec![tile_at(0.0, 300.0)];
        assert!(resolve_vertical(&mut player, &obstacles, 6.0).is_empty());
        assert_eq!(player.rect.y, 0.0);
    }
}
